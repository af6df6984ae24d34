//! Contact section: office details on the left, the form on the right.

use crate::catalog::{CONTACT_EMAIL, CONTACT_SUBTITLE, OFFICE_HOURS, PHONE};
use crate::core::contact::{ContactField, ContactForm, SubmissionStatus};
use crate::styles::theme;
use crate::translation::LocalTranslator;
use crate::utils::form::FormCursor;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent. We will get back to you soon.";
pub const ERROR_MESSAGE: &str =
    "Sorry, your message could not be sent. Please try again or call us directly.";

/// Everything the contact panel needs to draw itself
pub struct ContactPanel<'a> {
    pub form: &'a ContactForm,
    pub status: SubmissionStatus,
    pub inputs_enabled: bool,
    pub cursor: &'a FormCursor,
    /// Whether keyboard input currently goes to the form
    pub focused: bool,
    pub translator: &'a LocalTranslator,
}

impl ContactPanel<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        self.render_info(frame, chunks[0]);
        self.render_form(frame, chunks[1]);
    }

    fn render_info(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let tr = |s: &'static str| self.translator.translate(s).into_owned();

        let mut lines = vec![
            Line::styled(tr("Get In Touch"), t.title_style()),
            Line::from(""),
            Line::styled(CONTACT_SUBTITLE, t.text_style()),
            Line::from(""),
            Line::styled(format!("📞 {}", tr("Phone")), t.title_style()),
            Line::styled(PHONE, t.accent_style()),
            Line::from(""),
            Line::styled(format!("✉️  {}", tr("Email")), t.title_style()),
            Line::styled(CONTACT_EMAIL, t.accent_style()),
            Line::from(""),
            Line::styled(format!("📍 {}", tr("Office Hours")), t.title_style()),
        ];
        lines.extend(OFFICE_HOURS.iter().map(|l| Line::styled(*l, t.text_style())));

        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }),
            area.inner(Margin::new(1, 0)),
        );
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(1),
                Constraint::Length(2),
            ])
            .split(area);

        for (i, field) in ContactField::ALL.into_iter().enumerate() {
            self.render_field(frame, chunks[i], field);
        }

        let button = match self.status {
            SubmissionStatus::Sending => self.translator.translate("Sending..."),
            _ => self.translator.translate("Send Message"),
        };
        let button_style = if self.inputs_enabled {
            t.accent_style()
        } else {
            t.disabled_style()
        };
        frame.render_widget(
            Paragraph::new(format!("[ {} ]", button))
                .style(button_style)
                .alignment(Alignment::Center),
            chunks[4],
        );

        let status_line = match self.status {
            SubmissionStatus::Success => Some(Line::styled(SUCCESS_MESSAGE, t.success_style())),
            SubmissionStatus::Error => Some(Line::styled(ERROR_MESSAGE, t.error_style())),
            _ => None,
        };
        if let Some(line) = status_line {
            frame.render_widget(
                Paragraph::new(line)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                chunks[5],
            );
        }
    }

    fn render_field(&self, frame: &mut Frame, area: Rect, field: ContactField) {
        let t = theme();
        let is_focused = self.focused && self.cursor.focused() == field;
        let value = self.form.get(field);

        let border_style = if self.cursor.is_flagged(field) {
            t.error_style()
        } else if is_focused {
            t.border_focused_style()
        } else {
            t.border_style()
        };
        let text_style = if self.inputs_enabled {
            t.text_style()
        } else {
            t.disabled_style()
        };

        let label = self.translator.translate(field.label());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" {} * ", label));
        let inner = block.inner(area);

        frame.render_widget(
            Paragraph::new(value)
                .style(text_style)
                .block(block)
                .wrap(Wrap { trim: false }),
            area,
        );

        if is_focused && self.inputs_enabled && inner.width > 0 {
            let col = self.cursor.cursor(field) as u16;
            let x = inner.x + col % inner.width;
            let y = inner.y + (col / inner.width).min(inner.height.saturating_sub(1));
            frame.set_cursor_position(Position::new(x, y));
        }
    }
}
