//! Client-side state machines.
//!
//! These are plain data types with no reactive dependencies; components wrap
//! them in `RwSignal`s and drive them through the methods here.

use chrono::{DateTime, FixedOffset, Utc};

use crate::types::{ChatReply, ChatRequest, HistoryEntry, UserSession};

/// Prior exchanges the client keeps before appending a new pair.
pub const HISTORY_CARRY: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Chat,
    Profile,
    Logout,
}

impl Page {
    pub const NAV: [Page; 4] = [Page::Home, Page::Chat, Page::Profile, Page::Logout];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Dashboard",
            Page::Chat => "AI Chat",
            Page::Profile => "My Profile",
            Page::Logout => "Logout",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Home => "📊",
            Page::Chat => "💬",
            Page::Profile => "👤",
            Page::Logout => "🚪",
        }
    }
}

/// What the shell renders for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    SignIn,
    LoggingOut,
    Page(Page),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    pub user: Option<UserSession>,
    pub page: Page,
}

impl Default for Shell {
    fn default() -> Self {
        Self {
            user: None,
            page: Page::Home,
        }
    }
}

impl Shell {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn authenticate(&mut self, session: UserSession) {
        self.user = Some(session);
        self.page = Page::Home;
    }

    pub fn select(&mut self, page: Page) {
        if self.is_authenticated() {
            self.page = page;
        }
    }

    /// Second half of a logout: drop the session and reset to Home.
    pub fn complete_logout(&mut self) {
        self.user = None;
        self.page = Page::Home;
    }

    pub fn screen(&self) -> Screen {
        match (&self.user, self.page) {
            (None, _) => Screen::SignIn,
            (Some(_), Page::Logout) => Screen::LoggingOut,
            (Some(_), page) => Screen::Page(page),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn title(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Sign Up",
        }
    }

    pub fn toggle_prompt(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Don't have an account? ",
            AuthMode::SignUp => "Already have an account? ",
        }
    }

    pub fn other(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }
}

pub const MISSING_FIELDS: &str = "Please fill in all fields";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    pub mode: AuthMode,
    pub error: Option<String>,
}

impl SignInForm {
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.other();
        self.error = None;
    }

    /// Both modes accept any non-empty credentials.
    pub fn submit(&mut self) -> Option<UserSession> {
        if self.email.is_empty() || self.password.is_empty() {
            self.error = Some(MISSING_FIELDS.to_string());
            return None;
        }
        self.error = None;
        Some(UserSession::from_email(self.email.clone()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    User,
    Assistant,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub kind: MessageKind,
    pub content: String,
    /// ISO-8601, or whatever the server returned.
    pub timestamp: String,
}

impl ChatMessage {
    pub fn new(kind: MessageKind, content: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            content: content.into(),
            timestamp: timestamp.into(),
        }
    }

    pub fn clock(&self) -> String {
        clock_label(&self.timestamp)
    }
}

fn now_iso() -> String {
    Utc::now().to_rfc3339()
}

/// `HH:MM` for an RFC 3339 or epoch-seconds timestamp, empty if unparseable.
pub fn clock_label(timestamp: &str) -> String {
    if let Ok(parsed) = DateTime::<FixedOffset>::parse_from_rfc3339(timestamp) {
        return parsed.format("%H:%M").to_string();
    }
    timestamp
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_default()
}

/// A send that has been accepted and is waiting on the server.
#[derive(Debug, Clone)]
pub struct PendingSend {
    pub message: String,
    pub history: Vec<HistoryEntry>,
}

impl PendingSend {
    pub fn request(&self) -> ChatRequest {
        ChatRequest {
            message: self.message.clone(),
            conversation_history: self.history.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    pub messages: Vec<ChatMessage>,
    pub history: Vec<HistoryEntry>,
    pub loading: bool,
}

impl ChatSession {
    /// Accepts a send unless the input is blank or a send is already in flight.
    pub fn begin_send(&mut self, input: &str) -> Option<PendingSend> {
        if input.trim().is_empty() || self.loading {
            return None;
        }
        self.messages
            .push(ChatMessage::new(MessageKind::User, input, now_iso()));
        self.loading = true;
        Some(PendingSend {
            message: input.to_string(),
            history: self.history.clone(),
        })
    }

    pub fn complete(&mut self, sent: &PendingSend, reply: ChatReply) {
        let timestamp = reply.timestamp.unwrap_or_else(now_iso);
        self.messages.push(ChatMessage::new(
            MessageKind::Assistant,
            reply.response.clone(),
            timestamp,
        ));

        let skip = self.history.len().saturating_sub(HISTORY_CARRY);
        let mut history: Vec<HistoryEntry> = self.history.drain(skip..).collect();
        history.push(HistoryEntry::user(sent.message.clone()));
        history.push(HistoryEntry::assistant(reply.response));
        self.history = history;
    }

    pub fn fail(&mut self, text: impl Into<String>) {
        self.messages
            .push(ChatMessage::new(MessageKind::Error, text, now_iso()));
    }

    pub fn finish(&mut self) {
        self.loading = false;
    }
}

/// Runs a closure when dropped, on every exit path of the owning scope.
pub struct OnExit<F: FnOnce()>(Option<F>);

impl<F: FnOnce()> OnExit<F> {
    pub fn new(f: F) -> Self {
        Self(Some(f))
    }
}

impl<F: FnOnce()> Drop for OnExit<F> {
    fn drop(&mut self) {
        if let Some(f) = self.0.take() {
            f();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HistoryRole;
    use std::cell::Cell;

    fn signed_in() -> Shell {
        let mut shell = Shell::default();
        shell.authenticate(UserSession::from_email("sam@example.com"));
        shell
    }

    fn reply(text: &str) -> ChatReply {
        ChatReply {
            response: text.to_string(),
            conversation_id: None,
            timestamp: Some("2024-05-01T09:30:00Z".to_string()),
            error: None,
        }
    }

    #[test]
    fn test_shell_starts_signed_out() {
        let shell = Shell::default();
        assert_eq!(shell.screen(), Screen::SignIn);
        assert_eq!(shell.page, Page::Home);
    }

    #[test]
    fn test_select_requires_session() {
        let mut shell = Shell::default();
        shell.select(Page::Chat);
        assert_eq!(shell.screen(), Screen::SignIn);

        let mut shell = signed_in();
        shell.select(Page::Profile);
        assert_eq!(shell.screen(), Screen::Page(Page::Profile));
    }

    #[test]
    fn test_logout_from_any_page() {
        for page in [Page::Home, Page::Chat, Page::Profile] {
            let mut shell = signed_in();
            shell.select(page);
            shell.select(Page::Logout);
            assert_eq!(shell.screen(), Screen::LoggingOut);

            shell.complete_logout();
            assert_eq!(shell.screen(), Screen::SignIn);
            assert_eq!(shell.page, Page::Home);
            assert!(shell.user.is_none());
        }
    }

    #[test]
    fn test_sign_in_validation() {
        let mut form = SignInForm {
            email: "a@b.c".into(),
            ..Default::default()
        };
        assert!(form.submit().is_none());
        assert_eq!(form.error.as_deref(), Some(MISSING_FIELDS));

        form.password = "secret".into();
        let session = form.submit().unwrap();
        assert_eq!(session.name, "a");
        assert!(form.error.is_none());
    }

    #[test]
    fn test_toggle_mode_clears_error() {
        let mut form = SignInForm::default();
        form.submit();
        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::SignUp);
        assert!(form.error.is_none());
        assert!(form.submit().is_none());
    }

    #[test]
    fn test_blank_or_busy_send_is_ignored() {
        let mut chat = ChatSession::default();
        assert!(chat.begin_send("   ").is_none());
        assert!(chat.messages.is_empty());

        assert!(chat.begin_send("first").is_some());
        assert!(chat.loading);
        assert!(chat.begin_send("second").is_none());
        assert_eq!(chat.messages.len(), 1);
    }

    #[test]
    fn test_complete_appends_reply_and_history() {
        let mut chat = ChatSession::default();
        let sent = chat.begin_send("hello").unwrap();
        assert!(sent.history.is_empty());

        chat.complete(&sent, reply("hi there"));
        chat.finish();

        assert!(!chat.loading);
        assert_eq!(chat.messages.len(), 2);
        assert_eq!(chat.messages[1].kind, MessageKind::Assistant);
        assert_eq!(chat.messages[1].clock(), "09:30");
        assert_eq!(chat.history.len(), 2);
        assert_eq!(chat.history[0].role, HistoryRole::User);
        assert_eq!(chat.history[1].content, "hi there");
    }

    #[test]
    fn test_history_keeps_last_four_plus_pair() {
        let mut chat = ChatSession::default();
        for i in 0..5 {
            let sent = chat.begin_send(&format!("q{}", i)).unwrap();
            chat.complete(&sent, reply(&format!("a{}", i)));
            chat.finish();
            assert!(chat.history.len() <= HISTORY_CARRY + 2);
        }
        let contents: Vec<&str> = chat.history.iter().map(|h| h.content.as_str()).collect();
        assert_eq!(contents, ["q2", "a2", "q3", "a3", "q4", "a4"]);
    }

    #[test]
    fn test_failure_adds_error_bubble_without_history() {
        let mut chat = ChatSession::default();
        chat.begin_send("hello").unwrap();
        chat.fail("Network error: offline");
        chat.finish();

        assert_eq!(chat.messages[1].kind, MessageKind::Error);
        assert!(chat.history.is_empty());
        assert!(chat.begin_send("again").is_some());
    }

    #[test]
    fn test_clock_label_formats() {
        assert_eq!(clock_label("2024-05-01T14:05:00+02:00"), "14:05");
        assert_eq!(clock_label("1700000000"), "22:13");
        assert_eq!(clock_label("garbage"), "");
    }

    #[test]
    fn test_on_exit_runs_on_early_return() {
        let ran = Cell::new(false);
        let attempt = |fail: bool| -> Result<(), ()> {
            let _guard = OnExit::new(|| ran.set(true));
            if fail {
                return Err(());
            }
            Ok(())
        };
        assert!(attempt(true).is_err());
        assert!(ran.get());
    }
}
