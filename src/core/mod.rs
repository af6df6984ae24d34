//! Interaction core of the site, free of any rendering or network code.
//!
//! Each controller owns its state and talks to the outside world only
//! through a small port trait, so all of it runs in plain unit tests.

pub mod contact;
pub mod language;
pub mod navigation;
pub mod routing;

pub use contact::{
    ContactField, ContactForm, DeliveryRequest, EmailSender, OutboundEmail, Submission,
    SubmissionController, SubmissionStatus,
};
pub use language::{Language, LanguageBridge, PageHost, SwitchOutcome, TranslationControl};
pub use navigation::{NavigationController, PageScroll, ScrollLock, ScrollSurface};
pub use routing::{legacy_redirect, resolve, Section};
