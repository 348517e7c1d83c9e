//! Color themes for the TUI
//!
//! A theme is a small set of resolved colors; "dark" and "light" variants
//! are selected by name from config (`MKSHOP_THEME` or the config file).

use ratatui::style::Color;

/// Resolved theme ready for use by components
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    pub background: Color,
    pub foreground: Color,

    /// Unfocused panel borders
    pub border: Color,
    /// Focused panel border / emphasis
    pub highlight: Color,

    pub title: Color,
    pub price: Color,
    pub muted: Color,
    pub error: Color,
    pub success: Color,

    pub selection: Color,
    pub selection_fg: Color,

    pub status_bar: Color,
}

impl Theme {
    /// Resolve a theme by configured name; unknown names fall back to dark
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::Rgb(18, 18, 20),
            foreground: Color::Rgb(220, 220, 220),
            border: Color::Rgb(70, 70, 80),
            highlight: Color::Rgb(255, 200, 90),
            title: Color::Rgb(240, 240, 245),
            price: Color::Rgb(140, 220, 140),
            muted: Color::Rgb(130, 130, 140),
            error: Color::Rgb(235, 100, 100),
            success: Color::Rgb(120, 215, 130),
            selection: Color::Rgb(60, 60, 75),
            selection_fg: Color::Rgb(255, 255, 255),
            status_bar: Color::Rgb(150, 150, 160),
        }
    }

    fn light() -> Self {
        Self {
            name: "light",
            background: Color::Rgb(248, 248, 246),
            foreground: Color::Rgb(35, 35, 40),
            border: Color::Rgb(180, 180, 185),
            highlight: Color::Rgb(160, 90, 0),
            title: Color::Rgb(20, 20, 25),
            price: Color::Rgb(20, 120, 40),
            muted: Color::Rgb(120, 120, 125),
            error: Color::Rgb(180, 40, 40),
            success: Color::Rgb(25, 130, 55),
            selection: Color::Rgb(215, 225, 245),
            selection_fg: Color::Rgb(10, 10, 15),
            status_bar: Color::Rgb(100, 100, 110),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_name_falls_back_to_dark() {
        assert_eq!(Theme::from_name("solarized").name, "dark");
        assert_eq!(Theme::from_name("LIGHT").name, "light");
    }
}
