//! Screen controllers for the application.
//!
//! Each screen owns its view state and handles both rendering and events.
//! Controllers with lifecycles (submission, language bridge) stay in the app;
//! screens see them through a context and answer with a [`ScreenAction`].
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                     App                      │
//! │   match current_screen {                     │
//! │     Page     => page.handle_event(...)       │
//! │     Fallback => fallback.handle_event(...)   │
//! │   }                                          │
//! │                     │                        │
//! │                     ▼                        │
//! │   ScreenAction::{UpdateField, SubmitContact, │
//! │                  SwitchLanguage, Reload, ..} │
//! └──────────────────────────────────────────────┘
//! ```

pub mod fallback;
pub mod page;
pub mod screen_trait;

pub use fallback::FallbackScreen;
pub use page::PageScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
