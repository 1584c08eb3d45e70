//! Dashboard page

use leptos::prelude::*;

use crate::styles::{self, colors};

const FEATURES: [(&str, &str); 3] = [
    (
        "🩺 Health Monitoring",
        "Track your vital signs and health metrics with our AI-powered monitoring system.",
    ),
    (
        "💊 Medication Tracking",
        "Never miss a dose with smart medication reminders and tracking.",
    ),
    (
        "📈 Progress Analytics",
        "View detailed analytics and insights about your health journey over time.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let hero = styles::card()
        .set("padding", "3rem")
        .set("margin-bottom", "2rem")
        .set("background", colors::PRIMARY_GRADIENT)
        .set("color", colors::WHITE)
        .set("border", "none");

    view! {
        <div style=styles::page().to_string()>
            <div style=hero.to_string()>
                <h1 style="margin: 0 0 1rem 0; font-size: 2.5rem; font-weight: 700;">
                    "Welcome to Better Health"
                </h1>
                <p style="margin: 0; font-size: 1.1rem; line-height: 1.6; opacity: 0.9; max-width: 640px;">
                    "Your intelligent healthcare companion. Get personalized health insights, chat with our AI assistant, and manage your wellness journey."
                </p>
            </div>

            <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 1.5rem;">
                {FEATURES
                    .into_iter()
                    .map(|(title, body)| {
                        view! {
                            <div style=styles::card().set("padding", "2rem").to_string()>
                                <p style=format!("margin: 0 0 0.75rem 0; color: {}; font-size: 1.25rem; font-weight: 600;", colors::TEXT_PRIMARY)>
                                    {title}
                                </p>
                                <p style=format!("margin: 0; color: {}; line-height: 1.6;", colors::TEXT_TERTIARY)>
                                    {body}
                                </p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
