//! Runs contact-form deliveries on the tokio runtime.
//!
//! The UI thread spawns a delivery and keeps drawing; the result comes back
//! over a oneshot channel that the event loop polls each tick.

use crate::core::contact::{DeliveryRequest, EmailSender};
use crate::error::DeliveryError;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::debug;

/// Handle for polling delivery completion
pub struct DeliveryHandle {
    receiver: oneshot::Receiver<Result<(), DeliveryError>>,
}

impl DeliveryHandle {
    /// Try to receive the result without blocking
    pub fn try_recv(&mut self) -> Option<Result<(), DeliveryError>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(Err(DeliveryError::Interrupted)),
        }
    }

    /// Wait for the result (CLI and tests)
    pub async fn wait(self) -> Result<(), DeliveryError> {
        self.receiver
            .await
            .unwrap_or(Err(DeliveryError::Interrupted))
    }
}

/// Service for delivering contact-form submissions
pub struct ContactService;

impl ContactService {
    /// Start delivering `request` asynchronously
    ///
    /// Returns a `DeliveryHandle` that can be polled for the result.
    pub fn start_delivery<S>(
        runtime: &tokio::runtime::Handle,
        sender: Arc<S>,
        request: DeliveryRequest,
    ) -> DeliveryHandle
    where
        S: EmailSender + 'static,
    {
        let (tx, receiver) = oneshot::channel();

        runtime.spawn(async move {
            let result = sender.send(&request).await;
            debug!("Delivery finished: ok={}", result.is_ok());
            let _ = tx.send(result);
        });

        DeliveryHandle { receiver }
    }
}
