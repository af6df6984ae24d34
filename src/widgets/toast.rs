//! Toast notification widget.
//!
//! Shows the contact-form status banner and short notices in the bottom-right
//! corner without moving the page underneath.

use crate::core::contact::{ERROR_DISPLAY, SUCCESS_DISPLAY};
use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap};
use std::time::{Duration, Instant};

/// How long plain notices stay up
const NOTICE_DISPLAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastVariant {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastVariant::Info => "\u{2139}",    // ℹ
            ToastVariant::Success => "\u{2714}", // ✔
            ToastVariant::Warning => "\u{26A0}", // ⚠
            ToastVariant::Error => "\u{2718}",   // ✘
        }
    }

    fn border_style(&self) -> Style {
        let t = theme();
        match self {
            ToastVariant::Info => t.border_focused_style(),
            ToastVariant::Success => t.success_style(),
            ToastVariant::Warning => t.warning_style(),
            ToastVariant::Error => t.error_style(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub variant: ToastVariant,
    pub created_at: Instant,
    /// `None` keeps the toast up until it is replaced or cleared
    pub duration: Option<Duration>,
}

impl Toast {
    pub fn new(message: impl Into<String>, variant: ToastVariant, now: Instant) -> Self {
        Self {
            message: message.into(),
            variant,
            created_at: now,
            duration: Some(NOTICE_DISPLAY),
        }
    }

    pub fn with_duration(mut self, duration: Option<Duration>) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.duration
            .is_some_and(|d| now.saturating_duration_since(self.created_at) >= d)
    }
}

/// Renders one toast in the bottom-right corner of the given area
pub struct ToastWidget<'a> {
    toast: &'a Toast,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }

    fn area(&self, area: Rect) -> Rect {
        let width = 48u16.min(area.width.saturating_sub(4));
        let height = if self.toast.message.chars().count() as u16 + 6 > width {
            4
        } else {
            3
        };
        let x = area.x + area.width.saturating_sub(width + 2);
        // keep clear of the footer
        let y = area.y + area.height.saturating_sub(height + 3);
        Rect::new(x, y, width, height)
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let toast_area = self.area(area);
        let t = theme();

        Widget::render(Clear, toast_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.toast.variant.border_style())
            .style(t.background_style());

        let paragraph = Paragraph::new(format!(
            " {} {} ",
            self.toast.variant.icon(),
            self.toast.message
        ))
        .block(block)
        .style(t.text_style().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

        Widget::render(paragraph, toast_area, buf);
    }
}

/// Holds the single visible toast
#[derive(Debug, Default)]
pub struct ToastManager {
    current: Option<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is showing
    pub fn push(&mut self, toast: Toast) {
        self.current = Some(toast);
    }

    pub fn info(&mut self, message: impl Into<String>, now: Instant) {
        self.push(Toast::new(message, ToastVariant::Info, now));
    }

    pub fn warning(&mut self, message: impl Into<String>, now: Instant) {
        self.push(Toast::new(message, ToastVariant::Warning, now));
    }

    /// Sending banner; stays until the outcome replaces it
    pub fn sending(&mut self, message: impl Into<String>, now: Instant) {
        self.push(Toast::new(message, ToastVariant::Info, now).with_duration(None));
    }

    /// Success banner, shown as long as the form shows success
    pub fn delivered(&mut self, message: impl Into<String>, now: Instant) {
        self.push(Toast::new(message, ToastVariant::Success, now).with_duration(Some(SUCCESS_DISPLAY)));
    }

    /// Error banner, shown as long as the form shows the error
    pub fn failed(&mut self, message: impl Into<String>, now: Instant) {
        self.push(Toast::new(message, ToastVariant::Error, now).with_duration(Some(ERROR_DISPLAY)));
    }

    /// Drop an expired toast; returns whether one is still showing
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|t| t.is_expired_at(now)) {
            self.current = None;
        }
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        if let Some(toast) = self.current() {
            frame.render_widget(ToastWidget::new(toast), area);
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_expires_after_three_seconds() {
        let now = Instant::now();
        let mut toasts = ToastManager::new();
        toasts.info("Hello", now);
        assert!(toasts.tick(now + Duration::from_millis(2999)));
        assert!(!toasts.tick(now + NOTICE_DISPLAY));
    }

    #[test]
    fn test_sending_banner_stays_until_replaced() {
        let now = Instant::now();
        let mut toasts = ToastManager::new();
        toasts.sending("Sending...", now);
        assert!(toasts.tick(now + Duration::from_secs(600)));
        toasts.failed("Nope", now);
        assert_eq!(toasts.current().map(|t| t.variant), Some(ToastVariant::Error));
        assert!(!toasts.tick(now + ERROR_DISPLAY));
    }
}
