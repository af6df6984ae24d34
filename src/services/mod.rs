//! Application services layer.
//!
//! Services run the side effects the core controllers ask for, off the UI
//! thread, and hand results back in a form the event loop can poll.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                   UI Layer                      │
//! │  (App, Screens, Components)                     │
//! └─────────────────────┬───────────────────────────┘
//!                       │
//!                       ▼
//! ┌─────────────────────────────────────────────────┐
//! │               Services Layer                    │
//! │  ┌────────────────┐                             │
//! │  │ ContactService │                             │
//! │  └────────────────┘                             │
//! └─────────────────────┬───────────────────────────┘
//!                       │
//!                       ▼
//! ┌─────────────────────────────────────────────────┐
//! │             Infrastructure Layer                │
//! │  (EmailJsClient, Config, CookieJar)             │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod contact_service;

pub use contact_service::{ContactService, DeliveryHandle};
