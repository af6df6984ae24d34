//! Theme and style system for the Happy Visit page
//!
//! The dark and light palettes are built around the brand green; the
//! no-color palette leans on modifiers only.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::sync::RwLock;

/// Brand green used for headings and the active section
pub const BRAND_GREEN: Color = Color::Rgb(8, 103, 68);
/// Lighter green readable on dark terminals
pub const BRAND_GREEN_LIGHT: Color = Color::Rgb(76, 175, 125);

/// List selection indicator shown next to the selected item
pub const LIST_HIGHLIGHT_SYMBOL: &str = "» ";

/// Global theme instance (supports runtime updates)
static THEME: RwLock<Theme> = RwLock::new(Theme {
    theme_type: ThemeType::Dark,
    primary: BRAND_GREEN_LIGHT,
    accent: Color::Yellow,
    success: Color::Green,
    warning: Color::Yellow,
    error: Color::Red,
    text: Color::White,
    text_muted: Color::DarkGray,
    border: Color::DarkGray,
    border_focused: BRAND_GREEN_LIGHT,
    highlight_bg: Color::DarkGray,
    background: Color::Reset,
});

/// Initialize the global theme (call once at startup, or to update at runtime)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(|e| e.into_inner());
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME.read().unwrap_or_else(|e| e.into_inner()).clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (equivalent to `NO_COLOR=1` / `--no-colors`)
    NoColor,
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

/// Color palette for the page
#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,

    /// Headings, active tab, focused borders
    pub primary: Color,
    /// Key hints and call-to-action text
    pub accent: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,

    pub text: Color,
    pub text_muted: Color,

    pub border: Color,
    pub border_focused: Color,
    pub highlight_bg: Color,
    /// Background color (use Reset for terminal default)
    pub background: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    /// Dark theme - for dark terminal backgrounds
    pub fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            primary: BRAND_GREEN_LIGHT,
            accent: Color::Yellow,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            text: Color::White,
            text_muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: BRAND_GREEN_LIGHT,
            highlight_bg: Color::DarkGray,
            background: Color::Reset,
        }
    }

    /// Light theme - the site's own look
    pub fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            primary: BRAND_GREEN,
            accent: Color::Rgb(180, 120, 0),
            success: BRAND_GREEN,
            warning: Color::Rgb(180, 120, 0),
            error: Color::Red,
            text: Color::Black,
            text_muted: Color::DarkGray,
            border: Color::Gray,
            border_focused: BRAND_GREEN,
            highlight_bg: Color::Rgb(220, 240, 230),
            background: Color::Reset,
        }
    }

    /// No-color theme - style helpers below avoid setting fg/bg
    pub fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            primary: Color::Reset,
            accent: Color::Reset,
            success: Color::Reset,
            warning: Color::Reset,
            error: Color::Reset,
            text: Color::Reset,
            text_muted: Color::Reset,
            border: Color::Reset,
            border_focused: Color::Reset,
            highlight_bg: Color::Reset,
            background: Color::Reset,
        }
    }

    fn is_plain(&self) -> bool {
        self.theme_type == ThemeType::NoColor
    }

    // === Style Helpers ===

    /// Style for headings
    pub fn title_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    /// Style for key hints and calls to action
    pub fn accent_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.success)
    }

    pub fn warning_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::ITALIC);
        }
        Style::default().fg(self.warning)
    }

    pub fn error_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        Style::default().fg(self.error)
    }

    pub fn border_focused_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.border_focused)
    }

    pub fn border_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().fg(self.border)
    }

    /// Style for the selected row or active tab
    pub fn highlight_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default()
            .fg(self.primary)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Inputs locked while a submission is in flight
    pub fn disabled_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    pub fn background_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().bg(self.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_type_from_str() {
        assert_eq!("dark".parse::<ThemeType>().unwrap(), ThemeType::Dark);
        assert_eq!("light".parse::<ThemeType>().unwrap(), ThemeType::Light);
        assert_eq!("no-color".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
        assert_eq!("anything".parse::<ThemeType>().unwrap(), ThemeType::Dark);
    }

    #[test]
    fn test_no_color_theme_styles_do_not_set_colors() {
        let t = Theme::new(ThemeType::NoColor);
        for s in [t.highlight_style(), t.error_style(), t.title_style()] {
            assert!(s.fg.is_none());
            assert!(s.bg.is_none());
        }
    }

    #[test]
    fn test_light_theme_uses_brand_green() {
        assert_eq!(Theme::light().primary, BRAND_GREEN);
    }
}
