//! Theme palette and inline style builders.
//!
//! Components render inline `style` attributes; everything visual funnels
//! through the tables here so the palette stays in one place.

use std::fmt;

pub mod colors {
    pub const PRIMARY_GRADIENT: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";
    pub const PRIMARY: &str = "#667eea";

    pub const WHITE: &str = "#ffffff";
    pub const LIGHT_BG: &str = "#f7fafc";
    pub const CARD_BG: &str = "#ffffff";
    pub const BORDER_COLOR: &str = "#e2e8f0";

    pub const TEXT_PRIMARY: &str = "#2d3748";
    pub const TEXT_SECONDARY: &str = "#4a5568";
    pub const TEXT_TERTIARY: &str = "#718096";

    pub const SUCCESS: &str = "#38a169";
    pub const ERROR: &str = "#e53e3e";

    pub const HOVER_SHADOW: &str = "0 4px 12px rgba(102, 126, 234, 0.4)";
    pub const FOCUS_SHADOW: &str = "0 0 0 3px rgba(102, 126, 234, 0.1)";
    pub const CARD_SHADOW: &str = "0 4px 16px rgba(0, 0, 0, 0.08)";
}

pub const FONT_FAMILY: &str = "'Inter', 'Segoe UI', sans-serif";
pub const SIDEBAR_WIDTH: &str = "280px";

/// Ordered CSS declarations. Setting a property twice keeps the position of
/// the first and the value of the last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style(Vec<(&'static str, String)>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.0.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.0.push((property, value)),
        }
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", property, value)?;
        }
        Ok(())
    }
}

impl From<Style> for String {
    fn from(style: Style) -> Self {
        style.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

pub fn input() -> Style {
    Style::new()
        .set("width", "100%")
        .set("padding", "0.75rem 1rem")
        .set("border", format!("1px solid {}", colors::BORDER_COLOR))
        .set("border-radius", "8px")
        .set("font-size", "0.9rem")
        .set("transition", "all 0.2s ease")
        .set("box-sizing", "border-box")
}

pub fn input_focused() -> Style {
    input()
        .set("border", format!("1px solid {}", colors::PRIMARY))
        .set("outline", "none")
        .set("box-shadow", colors::FOCUS_SHADOW)
}

pub fn button(variant: ButtonVariant) -> Style {
    let base = Style::new()
        .set("padding", "0.75rem 1rem")
        .set("border", "none")
        .set("border-radius", "8px")
        .set("font-size", "0.9rem")
        .set("font-weight", "600")
        .set("cursor", "pointer")
        .set("transition", "all 0.2s ease");

    match variant {
        ButtonVariant::Primary => base
            .set("background", colors::PRIMARY_GRADIENT)
            .set("color", colors::WHITE),
        ButtonVariant::Secondary => base
            .set("background", colors::WHITE)
            .set("border", format!("1px solid {}", colors::BORDER_COLOR))
            .set("color", colors::TEXT_SECONDARY),
    }
}

/// Raised look for a hovered, enabled button.
pub fn lifted(style: Style) -> Style {
    style
        .set("transform", "translateY(-1px)")
        .set("box-shadow", colors::HOVER_SHADOW)
}

pub fn disabled(style: Style) -> Style {
    style.set("opacity", "0.6").set("cursor", "not-allowed")
}

pub fn card() -> Style {
    Style::new()
        .set("background", colors::CARD_BG)
        .set("border-radius", "12px")
        .set("box-shadow", colors::CARD_SHADOW)
        .set("border", format!("1px solid {}", colors::BORDER_COLOR))
}

/// Content area to the right of the fixed sidebar.
pub fn page() -> Style {
    Style::new()
        .set("padding", "2rem")
        .set("margin-left", SIDEBAR_WIDTH)
        .set("min-height", "100vh")
        .set("background", colors::LIGHT_BG)
        .set("font-family", FONT_FAMILY)
        .set("box-sizing", "border-box")
}
