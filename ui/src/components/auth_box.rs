//! Sign-in / sign-up card

use leptos::prelude::*;

use crate::state::SignInForm;
use crate::styles::{self, colors, ButtonVariant, Style, FONT_FAMILY};
use crate::types::UserSession;

/// Credential form shown while no session exists.
///
/// Any non-empty email and password are accepted; the resulting session is
/// handed to `on_authenticated`.
#[component]
pub fn AuthBox(on_authenticated: Callback<UserSession>) -> impl IntoView {
    let form = RwSignal::new(SignInForm::default());
    let hovered = RwSignal::new(false);

    let submit = move || {
        if let Some(session) = form.try_update(SignInForm::submit).flatten() {
            tracing::info!("signed in as {}", session.email);
            on_authenticated.run(session);
        }
    };

    let card_style = Style::new()
        .set("border", format!("1px solid {}", colors::BORDER_COLOR))
        .set("padding", "2.5rem")
        .set("border-radius", "12px")
        .set("max-width", "420px")
        .set("margin", "4rem auto")
        .set("box-shadow", "0 8px 32px rgba(0, 0, 0, 0.08)")
        .set("background", colors::WHITE)
        .set("font-family", FONT_FAMILY);

    let logo_style = Style::new()
        .set("background", colors::PRIMARY_GRADIENT)
        .set("width", "60px")
        .set("height", "60px")
        .set("border-radius", "12px")
        .set("display", "flex")
        .set("align-items", "center")
        .set("justify-content", "center")
        .set("margin", "0 auto 1rem")
        .set("color", colors::WHITE)
        .set("font-size", "1.5rem");

    let label_style = format!(
        "display: block; margin-bottom: 0.5rem; color: {}; font-weight: 500; font-size: 0.9rem;",
        colors::TEXT_SECONDARY
    );

    let button_style = move || {
        let base = styles::button(ButtonVariant::Primary).set("width", "100%");
        let style = if hovered.get() { styles::lifted(base) } else { base };
        style.to_string()
    };

    view! {
        <div style=card_style.to_string()>
            <div style="text-align: center; margin-bottom: 2rem;">
                <div style=logo_style.to_string()>"🏥"</div>
                <h2 style=format!("margin: 0 0 0.5rem 0; color: {}; font-weight: 700;", colors::TEXT_PRIMARY)>
                    "Welcome to Health AI"
                </h2>
                <p style=format!("margin: 0; color: {}; font-size: 0.9rem;", colors::TEXT_TERTIARY)>
                    "Sign in to your health assistant account"
                </p>
            </div>

            <div style="margin-bottom: 1.25rem;">
                <label style=label_style.clone()>"Email"</label>
                <input
                    type="email"
                    placeholder="Enter your email"
                    style=styles::input().to_string()
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
            </div>

            <div style="margin-bottom: 1.5rem;">
                <label style=label_style>"Password"</label>
                <input
                    type="password"
                    placeholder="Enter your password"
                    style=styles::input().to_string()
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                />
            </div>

            <button
                style=button_style
                on:mouseenter=move |_| hovered.set(true)
                on:mouseleave=move |_| hovered.set(false)
                on:click=move |_| submit()
            >
                {move || form.with(|f| f.mode.title())}
            </button>

            <p style=format!("text-align: center; margin-top: 1.5rem; color: {}; font-size: 0.9rem;", colors::TEXT_TERTIARY)>
                {move || form.with(|f| f.mode.toggle_prompt())}
                <button
                    style=format!(
                        "background: none; border: none; color: {}; font-weight: 600; cursor: pointer; padding: 0;",
                        colors::PRIMARY
                    )
                    on:click=move |_| form.update(SignInForm::toggle_mode)
                >
                    {move || form.with(|f| f.mode.other().title())}
                </button>
            </p>

            <Show when=move || form.with(|f| f.error.is_some())>
                <p style=format!(
                    "color: {}; margin-top: 1rem; padding: 0.75rem; background: #fed7d7; border-radius: 6px; text-align: center; font-size: 0.9rem;",
                    colors::ERROR
                )>
                    {move || form.with(|f| f.error.clone().unwrap_or_default())}
                </p>
            </Show>
        </div>
    }
}
