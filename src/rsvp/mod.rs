//! RSVP submission: the submitter seam and the form's submission flow

mod flow;
mod simulated;
mod traits;

pub use flow::{confirmation_message, FlowEvent, RsvpFlow, SubmissionStatus, SubmitOutcome};
pub use simulated::SimulatedSubmitter;
pub use traits::RsvpSubmitter;

#[cfg(test)]
pub use traits::MockRsvpSubmitter;
