use crate::catalog::{COMPANY_NAME, PHONE};
use crate::core::language::Language;
use crate::styles::theme;
use crate::widgets::BrandLogo;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

/// Brand header shown above the section tabs
pub struct Header;

impl Header {
    pub const HEIGHT: u16 = 5;

    /// Render the logo, company name, `tagline`, and the active language
    pub fn render(frame: &mut Frame, area: Rect, tagline: &str, language: Language) -> Result<u16> {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_focused_style())
            .padding(Padding::new(1, 1, 0, 0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(BrandLogo::width() + 2),
                Constraint::Min(0),
                Constraint::Length(22),
            ])
            .split(inner);

        frame.render_widget(BrandLogo::new(), chunks[0]);

        let title = Paragraph::new(vec![
            Line::styled(COMPANY_NAME, t.title_style()),
            Line::styled(tagline.to_string(), t.text_style()),
            Line::styled(format!("☎ {}", PHONE), t.muted_style()),
        ]);
        frame.render_widget(title, chunks[1]);

        let lang = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("🌐 ", t.muted_style()),
                Span::styled(language.native_name(), t.accent_style()),
            ]),
        ])
        .alignment(Alignment::Right);
        frame.render_widget(lang, chunks[2]);

        Ok(Self::HEIGHT)
    }
}
