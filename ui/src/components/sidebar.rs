//! Sidebar component

use leptos::prelude::*;

use crate::state::Page;
use crate::styles::{colors, Style, FONT_FAMILY, SIDEBAR_WIDTH};

/// Fixed navigation rail with brand, page links and a help box
#[component]
pub fn Sidebar(
    /// Page currently shown
    #[prop(into)]
    current: Signal<Page>,
    /// Display name of the signed-in user
    #[prop(into)]
    user_name: Signal<Option<String>>,
    on_select: Callback<Page>,
) -> impl IntoView {
    let nav_style = Style::new()
        .set("padding", "1.5rem 1rem")
        .set("border-right", format!("1px solid {}", colors::BORDER_COLOR))
        .set("height", "100vh")
        .set("width", SIDEBAR_WIDTH)
        .set("background", colors::WHITE)
        .set("box-shadow", "2px 0 8px rgba(0, 0, 0, 0.04)")
        .set("font-family", FONT_FAMILY)
        .set("position", "fixed")
        .set("left", "0")
        .set("top", "0")
        .set("box-sizing", "border-box");

    let logo_style = Style::new()
        .set("background", colors::PRIMARY_GRADIENT)
        .set("width", "40px")
        .set("height", "40px")
        .set("border-radius", "10px")
        .set("display", "flex")
        .set("align-items", "center")
        .set("justify-content", "center")
        .set("color", colors::WHITE)
        .set("font-size", "1.2rem");

    let help_style = Style::new()
        .set("position", "absolute")
        .set("bottom", "2rem")
        .set("left", "1rem")
        .set("right", "1rem")
        .set("padding", "1rem")
        .set("background", colors::LIGHT_BG)
        .set("border-radius", "8px")
        .set("border", format!("1px solid {}", colors::BORDER_COLOR));

    view! {
        <nav style=nav_style.to_string()>
            <div style="display: flex; align-items: center; gap: 0.75rem; margin-bottom: 2rem; padding: 0 0.5rem;">
                <div style=logo_style.to_string()>"🏥"</div>
                <div>
                    <h3 style=format!("margin: 0; color: {}; font-weight: 700; font-size: 1.25rem;", colors::TEXT_PRIMARY)>
                        "Better Health AI"
                    </h3>
                    <p style=format!("margin: 0; color: {}; font-size: 0.8rem; font-weight: 500;", colors::TEXT_TERTIARY)>
                        {move || user_name.get().unwrap_or_else(|| "Medical Assistant".to_string())}
                    </p>
                </div>
            </div>

            <ul style="padding: 0; margin: 0;">
                {Page::NAV
                    .into_iter()
                    .map(|page| view! { <NavItem page=page current=current on_select=on_select /> })
                    .collect::<Vec<_>>()}
            </ul>

            <div style=help_style.to_string()>
                <p style=format!("margin: 0 0 0.5rem 0; color: {}; font-size: 0.9rem; font-weight: 600;", colors::TEXT_PRIMARY)>
                    "Need Help?"
                </p>
                <p style=format!("margin: 0; color: {}; font-size: 0.8rem; line-height: 1.4;", colors::TEXT_TERTIARY)>
                    "Our AI assistant is available 24/7 to answer your health questions."
                </p>
            </div>
        </nav>
    }
}

fn nav_item_style(active: bool, hovered: bool) -> String {
    let base = Style::new()
        .set("width", "100%")
        .set("padding", "0.75rem 1rem")
        .set("text-align", "left")
        .set("border", "none")
        .set("cursor", "pointer")
        .set("border-radius", "8px")
        .set("font-size", "0.9rem")
        .set("font-weight", "500")
        .set("transition", "all 0.2s ease")
        .set("display", "flex")
        .set("align-items", "center")
        .set("gap", "0.75rem");

    let styled = if active {
        base.set("background", colors::PRIMARY_GRADIENT)
            .set("color", colors::WHITE)
            .set("box-shadow", "0 2px 8px rgba(102, 126, 234, 0.3)")
    } else if hovered {
        base.set("background", colors::LIGHT_BG)
            .set("color", colors::TEXT_PRIMARY)
    } else {
        base.set("background", "transparent")
            .set("color", colors::TEXT_SECONDARY)
    };
    styled.to_string()
}

#[component]
fn NavItem(page: Page, current: Signal<Page>, on_select: Callback<Page>) -> impl IntoView {
    let hovered = RwSignal::new(false);

    view! {
        <li style="list-style: none; margin-bottom: 0.5rem;">
            <button
                on:click=move |_| on_select.run(page)
                on:mouseenter=move |_| hovered.set(true)
                on:mouseleave=move |_| hovered.set(false)
                style=move || nav_item_style(current.get() == page, hovered.get())
            >
                <span style="font-size: 1.1rem;">{page.icon()}</span>
                {page.label()}
            </button>
        </li>
    }
}
