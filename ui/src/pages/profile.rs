//! Profile page

use leptos::prelude::*;

use crate::state::Shell;
use crate::styles::{self, colors, ButtonVariant};

const GUEST: &str = "Guest User";

#[component]
fn InfoRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <p style="margin: 0 0 0.75rem 0; display: flex; justify-content: space-between;">
            <span style=format!("color: {}; font-weight: 500;", colors::TEXT_TERTIARY)>{label}</span>
            <span style=format!("color: {}; font-weight: 600;", colors::TEXT_PRIMARY)>{value}</span>
        </p>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let shell = expect_context::<RwSignal<Shell>>();
    let (email, name) = shell.with_untracked(|s| match &s.user {
        Some(user) => (user.email.clone(), user.name.clone()),
        None => (GUEST.to_string(), GUEST.to_string()),
    });

    let panel = format!(
        "background: {}; padding: 1.5rem; border-radius: 8px; border: 1px solid {};",
        colors::LIGHT_BG,
        colors::BORDER_COLOR
    );
    let section_title = format!(
        "margin: 0 0 1rem 0; color: {}; font-size: 1.1rem; font-weight: 600;",
        colors::TEXT_PRIMARY
    );
    let action = |variant| {
        styles::button(variant)
            .set("width", "100%")
            .set("margin-bottom", "0.75rem")
            .to_string()
    };
    let danger = styles::button(ButtonVariant::Secondary)
        .set("width", "100%")
        .set("color", colors::ERROR)
        .set("border", format!("1px solid {}", colors::ERROR))
        .to_string();

    view! {
        <div style=styles::page().to_string()>
            <h1 style=format!(
                "margin: 0 0 2rem 0; color: {}; font-size: 2rem; font-weight: 700; display: flex; align-items: center; gap: 0.75rem;",
                colors::TEXT_PRIMARY
            )>
                <span style="font-size: 2.5rem;">"👤"</span>
                "My Profile"
            </h1>

            <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 1.5rem;">
                <div style=styles::card().set("padding", "2rem").to_string()>
                    <h3 style=section_title.clone()>"Personal Information"</h3>
                    <div style=panel>
                        <InfoRow label="Email:" value=email />
                        <InfoRow label="Name:" value=name />
                        <p style="margin: 0; display: flex; justify-content: space-between;">
                            <span style=format!("color: {}; font-weight: 500;", colors::TEXT_TERTIARY)>"Status:"</span>
                            <span style=format!(
                                "color: {}; font-weight: 600; background: #f0fff4; padding: 0.25rem 0.75rem; border-radius: 12px; font-size: 0.8rem;",
                                colors::SUCCESS
                            )>"Active"</span>
                        </p>
                    </div>
                </div>

                <div style=styles::card().set("padding", "2rem").to_string()>
                    <h3 style=section_title>"Account Settings"</h3>
                    <button style=action(ButtonVariant::Primary)>"Edit Profile"</button>
                    <button style=action(ButtonVariant::Secondary)>"Privacy Settings"</button>
                    <button style=danger>"Delete Account"</button>
                </div>
            </div>
        </div>
    }
}
