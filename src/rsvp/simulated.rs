//! Stand-in submitter that waits a fixed delay and always succeeds

use super::traits::RsvpSubmitter;
use crate::error::RsvpError;
use crate::state::{Receipt, RsvpRequest};
use async_trait::async_trait;
use std::time::Duration;

/// Submitter that simulates a network round-trip
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl RsvpSubmitter for SimulatedSubmitter {
    async fn submit(&self, request: RsvpRequest) -> Result<Receipt, RsvpError> {
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "simulating RSVP submission");
        tokio::time::sleep(self.delay).await;
        let receipt = Receipt::new(request.attending);
        tracing::info!(receipt = %receipt.id, attending = request.attending, "RSVP received");
        Ok(receipt)
    }
}
