//! Chat message component

use leptos::prelude::*;

use crate::state::{ChatMessage, MessageKind};
use crate::styles::{colors, Style};

fn bubble_style(kind: MessageKind) -> Style {
    let base = Style::new()
        .set("max-width", "70%")
        .set("padding", "1rem 1.25rem")
        .set("border-radius", "12px")
        .set("line-height", "1.5")
        .set("white-space", "pre-wrap");

    match kind {
        MessageKind::User => base
            .set("align-self", "flex-end")
            .set("background", colors::PRIMARY_GRADIENT)
            .set("color", colors::WHITE)
            .set("border-bottom-right-radius", "4px"),
        MessageKind::Assistant => base
            .set("align-self", "flex-start")
            .set("background", colors::WHITE)
            .set("color", colors::TEXT_PRIMARY)
            .set("border", format!("1px solid {}", colors::BORDER_COLOR))
            .set("border-bottom-left-radius", "4px"),
        MessageKind::Error => base
            .set("align-self", "flex-start")
            .set("background", "#fed7d7")
            .set("color", colors::ERROR)
            .set("border", format!("1px solid {}", colors::ERROR))
            .set("border-bottom-left-radius", "4px"),
    }
}

/// Render a single chat bubble with sender label and clock time
#[component]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.kind == MessageKind::User;
    let meta_color = if is_user { "rgba(255, 255, 255, 0.8)" } else { colors::TEXT_TERTIARY };
    let clock = message.clock();

    view! {
        <div style=bubble_style(message.kind).to_string()>
            <div style=format!(
                "display: flex; justify-content: space-between; gap: 1rem; margin-bottom: 0.5rem; font-size: 0.75rem; font-weight: 600; color: {};",
                meta_color
            )>
                <span>{if is_user { "You" } else { "AI Assistant" }}</span>
                <span style="font-weight: 400;">{clock}</span>
            </div>
            <div>{message.content}</div>
        </div>
    }
}
