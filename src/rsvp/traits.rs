//! Trait abstraction for RSVP submission to enable mocking in tests

use crate::error::RsvpError;
use crate::state::{Receipt, RsvpRequest};
use async_trait::async_trait;

/// Delivers an RSVP somewhere and acknowledges it
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RsvpSubmitter: Send + Sync {
    /// Submit a validated RSVP
    async fn submit(&self, request: RsvpRequest) -> Result<Receipt, RsvpError>;
}
