//! Chat input component

use leptos::prelude::*;

use crate::styles::{self, colors, ButtonVariant, Style};

/// Single-line input with a send button. Enter submits.
#[component]
pub fn ChatInput(
    /// Current input value
    value: RwSignal<String>,
    /// Called when user submits
    on_submit: Callback<()>,
    /// True while a reply is pending
    #[prop(into)]
    busy: Signal<bool>,
) -> impl IntoView {
    let focused = RwSignal::new(false);
    let hovered = RwSignal::new(false);

    let input_style = move || {
        let base = if focused.get() { styles::input_focused() } else { styles::input() };
        base.set("flex", "1").set("width", "auto").to_string()
    };

    let button_style = move || {
        let base = styles::button(ButtonVariant::Primary).set("min-width", "100px");
        let style = if busy.get() {
            styles::disabled(base)
        } else if hovered.get() {
            styles::lifted(base)
        } else {
            base
        };
        style.to_string()
    };

    let container = Style::new()
        .set("padding", "1.5rem")
        .set("border-top", format!("1px solid {}", colors::BORDER_COLOR))
        .set("background", colors::WHITE);

    view! {
        <div style=container.to_string()>
            <div style="display: flex; gap: 0.75rem;">
                <input
                    type="text"
                    placeholder="Type your health question..."
                    style=input_style
                    prop:value=move || value.get()
                    prop:disabled=move || busy.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    on:focus=move |_| focused.set(true)
                    on:blur=move |_| focused.set(false)
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            on_submit.run(());
                        }
                    }
                />
                <button
                    style=button_style
                    prop:disabled=move || busy.get()
                    on:mouseenter=move |_| hovered.set(true)
                    on:mouseleave=move |_| hovered.set(false)
                    on:click=move |_| on_submit.run(())
                >
                    {move || if busy.get() { "Sending..." } else { "Send" }}
                </button>
            </div>
            <p style=format!("margin: 0.75rem 0 0 0; color: {}; font-size: 0.8rem;", colors::TEXT_TERTIARY)>
                "💡 Press Enter to send your message"
            </p>
        </div>
    }
}
