//! Screen trait and associated types.
//!
//! Screens own their view state and never touch the controllers the app
//! owns. They read them through a context and answer input with a
//! [`ScreenAction`] for the app to carry out.

use crate::core::contact::{ContactField, SubmissionController};
use crate::core::language::Language;
use crate::translation::LocalTranslator;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Read-only resources available while drawing
pub struct RenderContext<'a> {
    pub submission: &'a SubmissionController,
    /// Language the page is currently shown in
    pub language: Language,
    pub translator: &'a LocalTranslator,
    /// Year for the copyright line
    pub year: i32,
}

/// Read-only resources available while handling input
pub struct ScreenContext<'a> {
    pub submission: &'a SubmissionController,
    pub language: Language,
}

/// What the app should do after a screen handled an event
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScreenAction {
    #[default]
    None,
    /// Write one contact field
    UpdateField(ContactField, String),
    /// Submit the contact form (fields already passed the input checks)
    SubmitContact,
    SwitchLanguage(Language),
    /// Show a short notice
    Notify(String),
    /// Rebuild the page from scratch
    Reload,
    Quit,
}

pub trait Screen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// When true, character keys go to a text input instead of shortcuts
    fn is_input_focused(&self) -> bool {
        false
    }
}
