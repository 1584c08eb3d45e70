//! Better Health AI - Leptos frontend
//!
//! Single-page shell over the health assistant server: a sign-in card, then
//! a sidebar-driven dashboard, chat and profile. Sign-in is simulated on the
//! client and nothing survives a reload.

pub mod api;
pub mod components;
pub mod pages;
pub mod state;
pub mod styles;
pub mod types;

use leptos::prelude::*;

use components::{AuthBox, Sidebar, Spinner};
use pages::{ChatPage, HomePage, ProfilePage};
use state::{Page, Screen, Shell};
use styles::{colors, FONT_FAMILY};

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let shell = RwSignal::new(Shell::default());
    provide_context(shell);

    // Logout renders a placeholder for one pass, then drops the session.
    Effect::new(move |_| {
        if shell.with(|s| s.screen() == Screen::LoggingOut) {
            tracing::info!("logging out");
            shell.update(Shell::complete_logout);
        }
    });

    let on_authenticated = Callback::new(move |session| shell.update(|s| s.authenticate(session)));
    let on_select = Callback::new(move |page: Page| shell.update(|s| s.select(page)));
    let current = Signal::derive(move || shell.with(|s| s.page));
    let user_name = Signal::derive(move || shell.with(|s| s.user.as_ref().map(|u| u.name.clone())));

    view! {
        <main style=format!("min-height: 100vh; background: {}; font-family: {};", colors::LIGHT_BG, FONT_FAMILY)>
            {move || match shell.with(Shell::screen) {
                Screen::SignIn => view! { <AuthBox on_authenticated=on_authenticated /> }.into_any(),
                Screen::LoggingOut => view! {
                    <div style=format!("padding: 2rem; display: flex; align-items: center; gap: 0.75rem; color: {};", colors::TEXT_TERTIARY)>
                        <Spinner />
                        "Logging out..."
                    </div>
                }
                .into_any(),
                Screen::Page(page) => view! {
                    <Sidebar current=current user_name=user_name on_select=on_select />
                    {page_view(page)}
                }
                .into_any(),
            }}
        </main>
    }
}

fn page_view(page: Page) -> AnyView {
    match page {
        Page::Chat => view! { <ChatPage /> }.into_any(),
        Page::Profile => view! { <ProfilePage /> }.into_any(),
        Page::Home | Page::Logout => view! { <HomePage /> }.into_any(),
    }
}
