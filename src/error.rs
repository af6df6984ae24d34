//! Error taxonomy for the site core.
//!
//! Application plumbing uses `anyhow`; these typed errors exist where callers
//! need to tell failure kinds apart (the contact form treats configuration and
//! delivery failures the same on screen but logs them differently).

use thiserror::Error;

/// A required email credential is missing or still set to its template default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("email credential `{0}` is not set")]
    MissingCredential(&'static str),
    #[error("email credential `{name}` still holds the placeholder value `{value}`")]
    PlaceholderCredential { name: &'static str, value: String },
}

/// The email-delivery collaborator did not acknowledge the message.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("could not reach the email service: {0}")]
    Transport(String),
    #[error("email service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("delivery task ended before reporting a result")]
    Interrupted,
}

/// Why a contact submission ended in the error state.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// The page could not be put on screen.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no terminal to render into (stdout is not a TTY)")]
    MountPointMissing,
    #[error("failed to draw {what}: {message}")]
    Draw { what: &'static str, message: String },
}
