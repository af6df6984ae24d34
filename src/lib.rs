//! Happy Visit Home Health - the marketing site as a terminal application
//!
//! This library holds the site core (contact form lifecycle, overlay and
//! scroll-lock state, language sync, legacy routing), the static catalog, and
//! the ratatui front end built on top of it.

// Core modules
pub mod app;
pub mod build_check;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod emailjs;
pub mod error;
pub mod screens;
pub mod services;
pub mod styles;
pub mod translation;
pub mod tui;
pub mod ui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use config::{Config, EmailConfig};
pub use crate::core::contact::{ContactField, ContactForm, SubmissionController, SubmissionStatus};
pub use crate::core::language::{Language, LanguageBridge};
pub use crate::core::navigation::{NavigationController, PageScroll, ScrollLock};
pub use error::{ConfigurationError, DeliveryError, RenderError, SubmitError};
