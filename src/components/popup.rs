//! Overlay frame shared by the category modal, the mobile menu, and the
//! fallback view. Draws the dimmed backdrop, the border, the title, and an
//! optional hint line, and hands back the area left for content.

use crate::components::footer::Footer;
use crate::styles::theme;
use crate::utils::layout::center_popup;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

pub struct Popup<'a> {
    pub width_percent: u16,
    pub height_percent: u16,
    pub dim_background: bool,
    pub title: Option<String>,
    /// Hint text in footer format ("Close: Esc")
    pub hints: Option<&'a str>,
}

impl<'a> Popup<'a> {
    /// Popup at 70% width and 60% height
    pub fn new() -> Self {
        Self {
            width_percent: 70,
            height_percent: 60,
            dim_background: true,
            title: None,
            hints: None,
        }
    }

    pub fn width(mut self, percent: u16) -> Self {
        self.width_percent = percent;
        self
    }

    pub fn height(mut self, percent: u16) -> Self {
        self.height_percent = percent;
        self
    }

    pub fn dim_background(mut self, dim: bool) -> Self {
        self.dim_background = dim;
        self
    }

    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn hints(mut self, hints: &'a str) -> Self {
        self.hints = Some(hints);
        self
    }

    /// Draw the frame and return the content area
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Rect {
        let t = theme();
        let popup_area = center_popup(area, self.width_percent, self.height_percent);

        if self.dim_background {
            let dim = Block::default().style(t.muted_style());
            frame.render_widget(dim, area);
        }
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(t.border_focused_style())
            .style(t.background_style());
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let mut constraints = Vec::with_capacity(3);
        if self.title.is_some() {
            constraints.push(Constraint::Length(2));
        }
        constraints.push(Constraint::Min(0));
        if self.hints.is_some() {
            constraints.push(Constraint::Length(1));
        }
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let mut idx = 0;
        if let Some(ref title) = self.title {
            frame.render_widget(
                Paragraph::new(title.as_str())
                    .alignment(Alignment::Center)
                    .style(t.title_style()),
                chunks[idx],
            );
            idx += 1;
        }
        let content_area = chunks[idx];
        idx += 1;

        if let Some(hints) = self.hints {
            frame.render_widget(
                Paragraph::new(Footer::hint_line(hints)).alignment(Alignment::Center),
                chunks[idx],
            );
        }

        content_area
    }
}

impl Default for Popup<'_> {
    fn default() -> Self {
        Self::new()
    }
}
