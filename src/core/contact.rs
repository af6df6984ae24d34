//! Contact form state and its submission lifecycle.
//!
//! ```text
//!            submit                 delivered
//!   Idle ───────────────▶ Sending ─────────────▶ Success ──(5s)──▶ Idle
//!                            │
//!                            │ config missing / rejected
//!                            ▼
//!                          Error ──(8s)──▶ Idle
//! ```
//!
//! The controller never performs I/O itself. `submit` hands back a
//! [`DeliveryRequest`] for the caller to run through an [`EmailSender`], and
//! the caller reports the outcome with `finish`. Auto-reset timers are
//! deadlines checked by `tick`, so a torn-down controller has nothing left
//! running.

use crate::config::{EmailConfig, EmailCredentials};
use crate::error::{ConfigurationError, DeliveryError, SubmitError};
use serde::Serialize;
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// How long the success banner stays up before the form returns to idle
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(5000);
/// How long the error banner stays up before the form returns to idle
pub const ERROR_DISPLAY: Duration = Duration::from_millis(8000);

/// Where the contact form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

/// One of the four contact form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    /// Fields in tab order
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
            ContactField::Message => "Message",
        }
    }
}

/// The four free-text fields of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Reset every field to empty
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Fields that are blank (the input layer refuses to submit while any remain)
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }
}

/// Template parameters sent to the email service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from_name: String,
    pub from_email: String,
    pub phone: String,
    pub message: String,
    pub to_email: String,
}

/// Everything the email collaborator needs for one send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRequest {
    pub credentials: EmailCredentials,
    pub email: OutboundEmail,
}

/// Outbound port for the third-party email-delivery service
pub trait EmailSender: Send + Sync {
    /// Deliver one message. `Ok` means the service acknowledged it.
    fn send(
        &self,
        request: &DeliveryRequest,
    ) -> impl Future<Output = Result<(), DeliveryError>> + Send;
}

/// What `submit` decided
#[derive(Debug)]
pub enum Submission {
    /// A submission is already in flight; nothing changed
    Ignored,
    /// Credentials are unusable; the form is now in the error state
    Rejected(ConfigurationError),
    /// The caller should deliver this request and report back via `finish`
    Dispatch(DeliveryRequest),
}

/// Owns the contact form fields and drives the submission lifecycle
#[derive(Debug)]
pub struct SubmissionController {
    form: ContactForm,
    status: SubmissionStatus,
    reset_deadline: Option<Instant>,
    settings: EmailConfig,
    last_error: Option<String>,
    torn_down: bool,
}

impl SubmissionController {
    pub fn new(settings: EmailConfig) -> Self {
        Self {
            form: ContactForm::default(),
            status: SubmissionStatus::Idle,
            reset_deadline: None,
            settings,
            last_error: None,
            torn_down: false,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// When the current success/error banner will be cleared, if one is showing
    pub fn reset_deadline(&self) -> Option<Instant> {
        self.reset_deadline
    }

    /// Message of the most recent failure, kept until the next submit
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Inputs are disabled while a submission is in flight
    pub fn inputs_enabled(&self) -> bool {
        !self.torn_down && self.status != SubmissionStatus::Sending
    }

    /// Write one field. No validation happens here.
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        if !self.inputs_enabled() {
            return;
        }
        self.form.set(field, value.into());
    }

    /// Start a submission.
    pub fn submit(&mut self, now: Instant) -> Submission {
        if self.torn_down || self.status == SubmissionStatus::Sending {
            return Submission::Ignored;
        }

        self.status = SubmissionStatus::Sending;
        self.reset_deadline = None;
        self.last_error = None;

        match self.settings.credentials() {
            Ok(credentials) => {
                info!("Submitting contact form for {}", self.form.email);
                Submission::Dispatch(DeliveryRequest {
                    credentials,
                    email: OutboundEmail {
                        from_name: self.form.name.clone(),
                        from_email: self.form.email.clone(),
                        phone: self.form.phone.clone(),
                        message: self.form.message.clone(),
                        to_email: self.settings.to_email.clone(),
                    },
                })
            }
            Err(e) => {
                warn!("Email service not configured: {}", e);
                self.enter_error(e.to_string(), now);
                Submission::Rejected(e)
            }
        }
    }

    /// Report the outcome of a dispatched request.
    pub fn finish(&mut self, result: Result<(), DeliveryError>, now: Instant) {
        match result {
            Ok(()) => self.delivered(now),
            Err(e) => self.delivery_failed(&e, now),
        }
    }

    fn delivered(&mut self, now: Instant) {
        if self.torn_down || self.status != SubmissionStatus::Sending {
            return;
        }
        info!("Contact form delivered");
        self.status = SubmissionStatus::Success;
        self.form.clear();
        self.reset_deadline = Some(now + SUCCESS_DISPLAY);
    }

    fn delivery_failed(&mut self, e: &DeliveryError, now: Instant) {
        if self.torn_down || self.status != SubmissionStatus::Sending {
            return;
        }
        error!("Contact form delivery failed: {}", e);
        self.enter_error(e.to_string(), now);
    }

    /// Clear an expired success/error banner. Returns true if the status changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.torn_down {
            return false;
        }
        match self.reset_deadline {
            Some(deadline) if now >= deadline => {
                self.status = SubmissionStatus::Idle;
                self.reset_deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Cancel pending timers; the controller ignores every call afterwards.
    pub fn teardown(&mut self) {
        self.reset_deadline = None;
        self.torn_down = true;
    }

    /// Run a whole submission against `sender`: submit, deliver, finish.
    ///
    /// `clock` is read once before dispatch and once after the send completes.
    pub async fn submit_with<S, C>(&mut self, sender: &S, clock: C) -> Result<(), SubmitError>
    where
        S: EmailSender,
        C: Fn() -> Instant,
    {
        match self.submit(clock()) {
            Submission::Ignored => Ok(()),
            Submission::Rejected(e) => Err(e.into()),
            Submission::Dispatch(request) => match sender.send(&request).await {
                Ok(()) => {
                    self.delivered(clock());
                    Ok(())
                }
                Err(e) => {
                    self.delivery_failed(&e, clock());
                    Err(e.into())
                }
            },
        }
    }

    fn enter_error(&mut self, message: String, now: Instant) {
        self.status = SubmissionStatus::Error;
        self.last_error = Some(message);
        self.reset_deadline = Some(now + ERROR_DISPLAY);
    }
}
