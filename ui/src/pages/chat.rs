//! Chat page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ChatEndpoint};
use crate::components::{ChatInput, MessageBubble, ThinkingIndicator};
use crate::state::{ChatSession, OnExit, Shell};
use crate::styles::{self, colors};
use crate::types::MOCK_TOKEN;

const TOPICS: [&str; 4] = [
    "Healthy lifestyle tips",
    "Exercise and nutrition",
    "Sleep and mental wellness",
    "General health questions",
];

#[component]
fn Welcome() -> impl IntoView {
    view! {
        <div style=format!("text-align: center; padding: 2rem; color: {};", colors::TEXT_TERTIARY)>
            <h3 style="margin-bottom: 1rem;">"👋 Welcome to Better Health AI Chat"</h3>
            <p style="margin-bottom: 0.5rem;">
                "I'm here to help with general health information and wellness tips."
            </p>
            <p style="margin-bottom: 0.5rem;">"💡 You can ask me about:"</p>
            <ul style="text-align: left; display: inline-block;">
                {TOPICS.into_iter().map(|t| view! { <li>{t}</li> }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let shell = expect_context::<RwSignal<Shell>>();
    let session = RwSignal::new(ChatSession::default());
    let input = RwSignal::new(String::new());
    let endpoint = RwSignal::new(ChatEndpoint::default());

    let (name, token) = shell.with_untracked(|s| match &s.user {
        Some(user) => (user.name.clone(), user.token.clone()),
        None => ("User".to_string(), MOCK_TOKEN.to_string()),
    });

    let send = Callback::new(move |_: ()| {
        let text = input.get_untracked();
        let Some(pending) = session.try_update(|s| s.begin_send(&text)).flatten() else {
            return;
        };
        input.set(String::new());

        let target = endpoint.get_untracked();
        let token = token.clone();
        spawn_local(async move {
            let _done = OnExit::new(move || session.update(ChatSession::finish));
            match api::send_chat(target, &pending.request(), &token).await {
                Ok(reply) => session.update(|s| s.complete(&pending, reply)),
                Err(e) => {
                    tracing::warn!("chat request failed: {}", e);
                    session.update(|s| s.fail(e.to_string()));
                }
            }
        });
    });

    let busy = Signal::derive(move || session.with(|s| s.loading));

    let panel = styles::card()
        .set("display", "flex")
        .set("flex-direction", "column")
        .set("height", "calc(100vh - 4rem)")
        .set("overflow", "hidden");

    let header = format!(
        "padding: 1.5rem; border-bottom: 1px solid {}; background: {}; color: {}; display: flex; justify-content: space-between; align-items: center;",
        colors::BORDER_COLOR,
        colors::PRIMARY_GRADIENT,
        colors::WHITE
    );

    view! {
        <div style=styles::page().to_string()>
            <div style=panel.to_string()>
                <div style=header>
                    <div>
                        <h2 style="margin: 0 0 0.25rem 0; font-size: 1.5rem; font-weight: 700;">
                            "💬 Better Health AI Assistant"
                        </h2>
                        <p style="margin: 0; opacity: 0.9; font-size: 0.9rem;">
                            {format!("Hello {}! Ask me anything about health and wellness", name)}
                        </p>
                    </div>
                    <select
                        style="padding: 0.4rem 0.6rem; border-radius: 6px; border: none; font-size: 0.8rem;"
                        on:change=move |ev| {
                            if let Some(choice) = ChatEndpoint::from_key(&event_target_value(&ev)) {
                                endpoint.set(choice);
                            }
                        }
                    >
                        {ChatEndpoint::ALL
                            .into_iter()
                            .map(|e| {
                                view! {
                                    <option value=e.key() prop:selected=move || endpoint.get() == e>
                                        {e.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </div>

                <div style="flex: 1; padding: 1.5rem; overflow-y: auto; background: #fafbfc; display: flex; flex-direction: column; gap: 1rem;">
                    <Show when=move || session.with(|s| s.messages.is_empty())>
                        <Welcome />
                    </Show>
                    <For
                        each=move || session.with(|s| s.messages.clone())
                        key=|m| m.id.clone()
                        children=|message| view! { <MessageBubble message=message /> }
                    />
                    <Show when=move || busy.get()>
                        <ThinkingIndicator />
                    </Show>
                </div>

                <ChatInput value=input on_submit=send busy=busy />
            </div>
        </div>
    }
}
