use crate::catalog::COMPANY_NAME;
use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Page footer: key hints plus the copyright line
pub struct Footer;

impl Footer {
    /// Height the footer needs (border, hints, copyright)
    pub const HEIGHT: u16 = 3;

    /// Render `hints` ("Label: keys | Label: keys") above the copyright line
    pub fn render(frame: &mut Frame, area: Rect, hints: &str, year: i32) -> Result<u16> {
        let t = theme();

        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Self::hint_line(hints),
            Line::styled(copyright(year), t.muted_style()),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);

        Ok(Self::HEIGHT)
    }

    /// Colour the label and keys of each `Label: keys` hint
    pub fn hint_line(hints: &str) -> Line<'static> {
        let t = theme();
        let mut spans = Vec::new();

        for (i, part) in hints.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }
            match part.split_once(": ") {
                Some((label, keys)) => {
                    spans.push(Span::styled(format!("{}: ", label), t.title_style()));
                    spans.push(Span::styled(keys.to_string(), t.accent_style()));
                }
                None => spans.push(Span::styled(part.to_string(), t.text_style())),
            }
        }

        Line::from(spans)
    }
}

/// "© <year> Happy Visit Home Health. All rights reserved."
pub fn copyright(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, COMPANY_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_uses_year() {
        assert_eq!(
            copyright(2026),
            "© 2026 Happy Visit Home Health. All rights reserved."
        );
    }

    #[test]
    fn test_hint_line_splits_label_and_keys() {
        let line = Footer::hint_line("Sections: Tab | Quit: q");
        let text: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, vec!["Sections: ", "Tab", " | ", "Quit: ", "q"]);
    }
}
