//! Error screen shown in place of the page after a render failure.

use crate::components::FallbackView;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;

#[derive(Debug, Default)]
pub struct FallbackScreen {
    detail: Option<String>,
}

impl FallbackScreen {
    pub fn new(detail: Option<String>) -> Self {
        Self { detail }
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl Screen for FallbackScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        FallbackView {
            detail: self.detail.as_deref(),
        }
        .render(frame, area);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, _ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }
        Ok(match key.code {
            KeyCode::Char('r') | KeyCode::F(5) | KeyCode::Enter => ScreenAction::Reload,
            KeyCode::Char('q') | KeyCode::Esc => ScreenAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                ScreenAction::Quit
            }
            _ => ScreenAction::None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmailConfig;
    use crate::core::contact::SubmissionController;
    use crate::core::language::Language;
    use crossterm::event::KeyEvent;

    #[test]
    fn test_reload_and_quit_keys() {
        let controller = SubmissionController::new(EmailConfig::default());
        let ctx = ScreenContext {
            submission: &controller,
            language: Language::En,
        };
        let mut screen = FallbackScreen::new(Some("boom".to_string()));
        let reload = screen
            .handle_event(Event::Key(KeyEvent::from(KeyCode::Char('r'))), &ctx)
            .unwrap();
        assert_eq!(reload, ScreenAction::Reload);
        let quit = screen
            .handle_event(Event::Key(KeyEvent::from(KeyCode::Char('q'))), &ctx)
            .unwrap();
        assert_eq!(quit, ScreenAction::Quit);
        assert_eq!(screen.detail(), Some("boom"));
    }
}
