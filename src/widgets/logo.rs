//! The [`BrandLogo`] widget renders the Happy Visit house mark.
use crate::styles::theme;
use indoc::indoc;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::Widget;

/// House-and-heart mark shown at the left of the header
///
/// ```text
///    /\
///   /♥ \
///   |__|
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BrandLogo;

impl BrandLogo {
    pub const fn new() -> Self {
        Self
    }

    pub const fn as_str() -> &'static str {
        indoc! {"
             /\\
            /♥ \\
            |__|"}
    }

    /// Width in columns of the widest line
    pub fn width() -> u16 {
        Self::as_str()
            .lines()
            .map(|l| l.chars().count() as u16)
            .max()
            .unwrap_or(0)
    }
}

impl Widget for BrandLogo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let logo_text = Text::styled(Self::as_str(), theme().title_style());
        logo_text.render(area, buf);
    }
}
