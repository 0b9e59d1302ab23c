//! RSVP submission flow: Idle -> Validating -> Pending -> Submitted

use super::traits::RsvpSubmitter;
use crate::error::RsvpError;
use crate::state::{Receipt, RsvpForm};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// Where the form is in its submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Validating,
    Pending,
    Submitted,
}

/// Immediate result of a submit request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the submitter is running
    Started,
    /// A required field was missing; nothing changed
    Rejected(RsvpError),
    /// A submission is already in flight, or the form is already submitted
    Ignored,
}

/// Completion of an in-flight submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    Submitted(Receipt),
    Failed(RsvpError),
}

type InFlight = oneshot::Receiver<Result<Receipt, RsvpError>>;

/// Owns the RSVP form and drives it through submission
pub struct RsvpFlow {
    pub form: RsvpForm,
    status: SubmissionStatus,
    receipt: Option<Receipt>,
    in_flight: Option<InFlight>,
    submitter: Arc<dyn RsvpSubmitter>,
    timeout: Duration,
}

impl RsvpFlow {
    pub fn new(submitter: Arc<dyn RsvpSubmitter>, timeout: Duration) -> Self {
        Self {
            form: RsvpForm::new(),
            status: SubmissionStatus::Idle,
            receipt: None,
            in_flight: None,
            submitter,
            timeout,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    /// The submit control is enabled only while idle
    pub fn can_submit(&self) -> bool {
        self.status == SubmissionStatus::Idle
    }

    /// Whether form fields accept edits
    pub fn is_editable(&self) -> bool {
        self.status == SubmissionStatus::Idle
    }

    /// Validate the form and start the submitter on a background task
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.can_submit() {
            tracing::debug!(status = ?self.status, "submit ignored");
            return SubmitOutcome::Ignored;
        }

        self.status = SubmissionStatus::Validating;
        let request = self.form.to_request();
        if let Err(err) = request.validate() {
            tracing::debug!(%err, "RSVP rejected");
            self.status = SubmissionStatus::Idle;
            return SubmitOutcome::Rejected(err);
        }

        let (tx, rx) = oneshot::channel();
        let submitter = Arc::clone(&self.submitter);
        let timeout = self.timeout;
        tokio::spawn(async move {
            let result = match tokio::time::timeout(timeout, submitter.submit(request)).await {
                Ok(result) => result,
                Err(_) => Err(RsvpError::transport(
                    format!("no response after {} ms", timeout.as_millis()),
                    true,
                )),
            };
            // Receiver is gone if the flow was dropped mid-flight
            let _ = tx.send(result);
        });

        self.in_flight = Some(rx);
        self.status = SubmissionStatus::Pending;
        tracing::info!("RSVP submission started");
        SubmitOutcome::Started
    }

    /// Check for a finished submission without blocking
    pub fn poll(&mut self) -> Option<FlowEvent> {
        let rx = self.in_flight.as_mut()?;
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Err(RsvpError::transport("submission task ended", true)),
        };
        self.in_flight = None;
        Some(self.complete(result))
    }

    /// Wait for the in-flight submission, if any
    pub async fn settle(&mut self) -> Option<FlowEvent> {
        let rx = self.in_flight.take()?;
        let result = rx
            .await
            .unwrap_or_else(|_| Err(RsvpError::transport("submission task ended", true)));
        Some(self.complete(result))
    }

    fn complete(&mut self, result: Result<Receipt, RsvpError>) -> FlowEvent {
        match result {
            Ok(receipt) => {
                self.status = SubmissionStatus::Submitted;
                self.receipt = Some(receipt.clone());
                FlowEvent::Submitted(receipt)
            }
            Err(err) => {
                tracing::warn!(%err, retryable = err.is_retryable(), "RSVP submission failed");
                self.status = SubmissionStatus::Idle;
                FlowEvent::Failed(err)
            }
        }
    }
}

/// Confirmation text for the attendance choice
pub fn confirmation_message(attending: bool) -> &'static str {
    if attending {
        "We're excited to celebrate with you!"
    } else {
        "We'll miss you, but thank you for letting us know."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsvp::{MockRsvpSubmitter, SimulatedSubmitter};
    use crate::state::RsvpRequest;
    use pretty_assertions::assert_eq;

    fn flow_with(submitter: impl RsvpSubmitter + 'static) -> RsvpFlow {
        RsvpFlow::new(Arc::new(submitter), Duration::from_secs(10))
    }

    fn fill(flow: &mut RsvpFlow, name: &str, email: &str, attending: bool) {
        flow.form.name.set_text(name);
        flow.form.email.set_text(email);
        if flow.form.is_attending() != attending {
            flow.form.attending.toggle_value();
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_missing_name_rejected_without_transition() {
            let mut mock = MockRsvpSubmitter::new();
            mock.expect_submit().never();
            let mut flow = flow_with(mock);
            fill(&mut flow, "", "x@y.com", true);

            let outcome = flow.submit();

            assert_eq!(outcome, SubmitOutcome::Rejected(RsvpError::MissingField("Name")));
            assert_eq!(flow.status(), SubmissionStatus::Idle);
            assert!(flow.poll().is_none());
        }

        #[tokio::test]
        async fn test_missing_email_rejected() {
            let mut mock = MockRsvpSubmitter::new();
            mock.expect_submit().never();
            let mut flow = flow_with(mock);
            fill(&mut flow, "A", "", false);

            assert_eq!(
                flow.submit(),
                SubmitOutcome::Rejected(RsvpError::MissingField("Email"))
            );
            assert!(flow.can_submit());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test(start_paused = true)]
        async fn test_idle_pending_submitted_with_regretful_message() {
            let mut flow = flow_with(SimulatedSubmitter::new(Duration::from_millis(1500)));
            fill(&mut flow, "A", "a@b.com", false);
            assert_eq!(flow.status(), SubmissionStatus::Idle);

            assert_eq!(flow.submit(), SubmitOutcome::Started);
            assert_eq!(flow.status(), SubmissionStatus::Pending);
            assert!(!flow.can_submit());
            assert!(flow.poll().is_none());

            let event = flow.settle().await;
            assert_eq!(flow.status(), SubmissionStatus::Submitted);
            let receipt = match event {
                Some(FlowEvent::Submitted(receipt)) => receipt,
                other => panic!("expected submission, got {other:?}"),
            };
            assert!(!receipt.attending);
            assert_eq!(
                confirmation_message(receipt.attending),
                "We'll miss you, but thank you for letting us know."
            );
            assert_eq!(flow.receipt(), Some(&receipt));
        }

        #[tokio::test]
        async fn test_submitter_receives_form_snapshot() {
            let mut mock = MockRsvpSubmitter::new();
            mock.expect_submit()
                .withf(|req: &RsvpRequest| {
                    req.name == "Ana" && req.email == "ana@example.com" && req.attending
                })
                .times(1)
                .returning(|req| Ok(Receipt::new(req.attending)));
            let mut flow = flow_with(mock);
            fill(&mut flow, "Ana", "ana@example.com", true);

            flow.submit();
            let event = flow.settle().await;

            assert!(matches!(event, Some(FlowEvent::Submitted(ref r)) if r.attending));
            assert_eq!(confirmation_message(true), "We're excited to celebrate with you!");
        }

        #[tokio::test]
        async fn test_second_submit_while_pending_is_noop() {
            let mut mock = MockRsvpSubmitter::new();
            mock.expect_submit()
                .times(1)
                .returning(|req| Ok(Receipt::new(req.attending)));
            let mut flow = flow_with(mock);
            fill(&mut flow, "A", "a@b.com", true);

            assert_eq!(flow.submit(), SubmitOutcome::Started);
            assert_eq!(flow.submit(), SubmitOutcome::Ignored);
            assert_eq!(flow.status(), SubmissionStatus::Pending);

            flow.settle().await;
            assert_eq!(flow.status(), SubmissionStatus::Submitted);
        }

        #[tokio::test]
        async fn test_submitted_is_terminal() {
            let mut mock = MockRsvpSubmitter::new();
            mock.expect_submit()
                .times(1)
                .returning(|req| Ok(Receipt::new(req.attending)));
            let mut flow = flow_with(mock);
            fill(&mut flow, "A", "a@b.com", true);
            flow.submit();
            flow.settle().await;

            assert_eq!(flow.submit(), SubmitOutcome::Ignored);
            assert!(!flow.is_editable());
            assert!(flow.settle().await.is_none());
        }

        #[tokio::test]
        async fn test_poll_picks_up_completion() {
            let mut mock = MockRsvpSubmitter::new();
            mock.expect_submit()
                .returning(|req| Ok(Receipt::new(req.attending)));
            let mut flow = flow_with(mock);
            fill(&mut flow, "A", "a@b.com", true);
            flow.submit();

            let mut event = None;
            for _ in 0..100 {
                tokio::task::yield_now().await;
                event = flow.poll();
                if event.is_some() {
                    break;
                }
            }

            assert!(matches!(event, Some(FlowEvent::Submitted(_))));
            assert_eq!(flow.status(), SubmissionStatus::Submitted);
        }
    }

    mod failures {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_transport_failure_returns_to_idle() {
            let mut mock = MockRsvpSubmitter::new();
            mock.expect_submit()
                .times(2)
                .returning(|_| Err(RsvpError::transport("connection refused", true)));
            let mut flow = flow_with(mock);
            fill(&mut flow, "A", "a@b.com", true);

            flow.submit();
            let event = flow.settle().await;

            assert_eq!(
                event,
                Some(FlowEvent::Failed(RsvpError::transport("connection refused", true)))
            );
            assert_eq!(flow.status(), SubmissionStatus::Idle);
            assert!(flow.receipt().is_none());

            // The guest can send it again
            assert_eq!(flow.submit(), SubmitOutcome::Started);
            flow.settle().await;
        }

        #[tokio::test(start_paused = true)]
        async fn test_slow_submitter_times_out() {
            let mut flow = RsvpFlow::new(
                Arc::new(SimulatedSubmitter::new(Duration::from_secs(60))),
                Duration::from_secs(5),
            );
            fill(&mut flow, "A", "a@b.com", true);
            flow.submit();

            match flow.settle().await {
                Some(FlowEvent::Failed(err)) => assert!(err.is_retryable()),
                other => panic!("expected timeout, got {other:?}"),
            }
            assert_eq!(flow.status(), SubmissionStatus::Idle);
        }
    }

    #[test]
    fn test_default_status_is_idle() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
    }
}
