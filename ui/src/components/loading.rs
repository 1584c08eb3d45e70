//! Loading indicators

use leptos::prelude::*;

use crate::styles::colors;

/// Spinning ring
#[component]
pub fn Spinner(#[prop(default = 16)] size: u32) -> impl IntoView {
    view! {
        <span style=format!(
            "display: inline-block; width: {size}px; height: {size}px; border: 2px solid {}; border-top-color: {}; border-radius: 50%; animation: spin 1s linear infinite;",
            colors::BORDER_COLOR,
            colors::PRIMARY
        )></span>
    }
}

/// Placeholder bubble while the assistant reply is pending
#[component]
pub fn ThinkingIndicator() -> impl IntoView {
    view! {
        <div style=format!(
            "align-self: flex-start; display: flex; align-items: center; gap: 0.75rem; padding: 1rem 1.25rem; background: {}; border: 1px solid {}; border-radius: 12px; color: {}; font-style: italic;",
            colors::WHITE,
            colors::BORDER_COLOR,
            colors::TEXT_TERTIARY
        )>
            <Spinner />
            "AI is thinking..."
        </div>
    }
}
