use crate::catalog::ServiceCategory;
use crate::components::popup::Popup;
use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

/// Detail view for one service category
pub struct CategoryModal<'a> {
    pub category: &'a ServiceCategory,
    pub scroll: u16,
}

impl CategoryModal<'_> {
    pub fn lines(&self) -> Vec<Line<'static>> {
        let t = theme();
        let mut lines = vec![
            Line::styled(self.category.full_description, t.text_style()),
            Line::from(""),
        ];

        if self.category.services.is_empty() {
            lines.push(Line::styled(
                "Call us to talk about what you need; we will find the right care.",
                t.muted_style(),
            ));
        }

        for item in self.category.services {
            lines.push(Line::styled(item.title, t.title_style()));
            lines.push(Line::styled(item.description, t.text_style()));
            for detail in item.details {
                lines.push(Line::from(vec![
                    Span::styled("  • ", t.accent_style()),
                    Span::styled(*detail, t.text_style()),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let content = Popup::new()
            .width(80)
            .height(80)
            .title(format!("{} {}", self.category.icon, self.category.title))
            .hints("Scroll: ↑/↓ | Close: Esc")
            .render(frame, area);

        frame.render_widget(
            Paragraph::new(self.lines())
                .wrap(Wrap { trim: true })
                .scroll((self.scroll, 0)),
            content.inner(Margin::new(1, 0)),
        );
    }
}
