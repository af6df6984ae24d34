use crate::catalog::PHONE;
use crate::components::popup::Popup;
use crate::error::RenderError;
use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

pub const FALLBACK_TITLE: &str = "Something went wrong";
pub const FALLBACK_BODY: &str = "Please refresh the page or contact us directly.";

/// Plain-text fallback used when the terminal cannot be drawn at all
pub fn fallback_text(detail: Option<&str>) -> String {
    let mut text = format!("{}\n{}\nPhone: {}", FALLBACK_TITLE, FALLBACK_BODY, PHONE);
    if let Some(detail) = detail {
        text.push_str(&format!("\nError: {}", detail));
    }
    text
}

/// Fallback text for an error that ended the TUI, if it was a render failure
pub fn render_failure_text(error: &anyhow::Error) -> Option<String> {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<RenderError>())
        .map(|render| fallback_text(Some(&render.to_string())))
}

/// Static view replacing the page after a render failure
pub struct FallbackView<'a> {
    pub detail: Option<&'a str>,
}

impl FallbackView<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let content = Popup::new()
            .width(60)
            .height(50)
            .dim_background(false)
            .title(FALLBACK_TITLE)
            .hints("Reload: r | Quit: q")
            .render(frame, area);

        let mut lines = vec![
            Line::from(""),
            Line::styled(FALLBACK_BODY, t.text_style()),
            Line::from(""),
            Line::styled(format!("☎ {}", PHONE), t.accent_style()),
        ];
        if let Some(detail) = self.detail {
            lines.push(Line::from(""));
            lines.push(Line::styled(format!("Error: {}", detail), t.muted_style()));
        }

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            content,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_text_includes_detail() {
        let text = fallback_text(Some("boom"));
        assert!(text.starts_with(FALLBACK_TITLE));
        assert!(text.contains("Error: boom"));
        assert!(!fallback_text(None).contains("Error:"));
    }

    #[test]
    fn test_render_failure_text_covers_every_render_error() {
        let missing = anyhow::Error::new(RenderError::MountPointMissing);
        assert!(render_failure_text(&missing)
            .unwrap()
            .starts_with(FALLBACK_TITLE));

        let draw = anyhow::Error::new(RenderError::Draw {
            what: "frame",
            message: "broken pipe".to_string(),
        })
        .context("Failed to run app");
        let text = render_failure_text(&draw).unwrap();
        assert!(text.starts_with(FALLBACK_TITLE));
        assert!(text.contains("broken pipe"));

        assert!(render_failure_text(&anyhow::anyhow!("config unreadable")).is_none());
    }
}
