//! Enrollment orchestrator.
//!
//! This module coordinates the enrollment state machine and side effects.

use std::sync::Arc;

use tracing::{debug, error, info, info_span, warn, Instrument};

use te_core::{
    enrollment::{
        EnrollmentAction, EnrollmentError, EnrollmentEvent, EnrollmentStateMachine,
        SecretOperation, ValidationFailureKind, WizardState,
    },
    form::{verification_code_form, CODE_FIELD},
    secret::OneTimeCode,
};

use crate::deps::EnrollmentPorts;
use crate::usecases::enrollment::context::EnrollmentContext;

/// Orchestrator that drives wizard state and side effects.
///
/// Every public operation returns the state reached once the operation and
/// the service calls it triggered have settled. Those calls run without
/// holding the context lock: a concurrent `close` (or `open`) applies at
/// once, and the results of calls started before it are dropped.
/// Collaborator failures are turned into events (alerts or
/// `verification_failed`), never into errors.
pub struct EnrollmentOrchestrator {
    context: Arc<EnrollmentContext>,
    ports: EnrollmentPorts,
}

impl EnrollmentOrchestrator {
    pub fn new(ports: EnrollmentPorts) -> Self {
        Self::with_context(Arc::new(EnrollmentContext::default()), ports)
    }

    pub fn with_context(context: Arc<EnrollmentContext>, ports: EnrollmentPorts) -> Self {
        Self { context, ports }
    }

    pub async fn open(&self) -> WizardState {
        self.dispatch(EnrollmentEvent::Open).await
    }

    pub async fn fetch_secret(&self) -> WizardState {
        self.dispatch(EnrollmentEvent::FetchSecret).await
    }

    pub async fn refresh_secret(&self) -> WizardState {
        self.dispatch(EnrollmentEvent::RefreshSecret).await
    }

    pub async fn advance(&self) -> WizardState {
        self.dispatch(EnrollmentEvent::Advance).await
    }

    pub async fn submit_code(&self, code: impl AsRef<str>) -> WizardState {
        let event = EnrollmentEvent::SubmitCode {
            code: OneTimeCode::new(code),
        };
        self.dispatch(event).await
    }

    pub async fn retry_from_scan(&self) -> WizardState {
        self.dispatch(EnrollmentEvent::RetryFromScan).await
    }

    pub async fn close(&self) -> WizardState {
        self.dispatch(EnrollmentEvent::Close).await
    }

    pub async fn get_state(&self) -> WizardState {
        self.context.get_state().await
    }

    pub async fn dispatch(&self, event: EnrollmentEvent) -> WizardState {
        let span = info_span!("usecase.enrollment_orchestrator.dispatch", event = ?event);
        async {
            // (event, epoch of the session it answers); `None` for user intents
            let mut pending_events = vec![(event, None)];

            while let Some((event, origin)) = pending_events.pop() {
                let Some((actions, epoch)) = self.apply(event, origin).await else {
                    continue;
                };
                for action in actions {
                    debug!(?action, "enrollment executing action");
                    if let Some(follow_up) = self.execute_action(action).await {
                        pending_events.push((follow_up, Some(epoch)));
                    }
                }
            }

            self.context.get_state().await
        }
        .instrument(span)
        .await
    }

    /// Runs one transition under the context lock and publishes the result.
    ///
    /// Returns `None` when `event` answers a call from an earlier session.
    async fn apply(
        &self,
        event: EnrollmentEvent,
        origin: Option<u64>,
    ) -> Option<(Vec<EnrollmentAction>, u64)> {
        let mut session = self.context.session().await;

        if let Some(epoch) = origin {
            if epoch != session.epoch {
                debug!(
                    result_epoch = epoch,
                    current_epoch = session.epoch,
                    event = ?event,
                    "dropping result from an earlier wizard session"
                );
                return None;
            }
        }
        if matches!(event, EnrollmentEvent::Open | EnrollmentEvent::Close) {
            session.epoch += 1;
        }

        let from = session.state.clone();
        let event_name = format!("{:?}", event);
        let (next, actions) = EnrollmentStateMachine::transition(from.clone(), event);
        info!(
            from = ?from.step,
            to = ?next.step,
            is_open = next.is_open,
            event = %event_name,
            "enrollment state transition"
        );
        if next != from {
            session.state = next.clone();
            self.ports.events.emit_wizard_state_changed(next).await;
        }

        Some((actions, session.epoch))
    }

    async fn execute_action(&self, action: EnrollmentAction) -> Option<EnrollmentEvent> {
        match action {
            EnrollmentAction::InitiateSecret => {
                Some(self.request_secret(SecretOperation::Initiate).await)
            }
            EnrollmentAction::RefreshSecret => {
                Some(self.request_secret(SecretOperation::Refresh).await)
            }
            EnrollmentAction::CollectCode => self.collect_code().await,
            EnrollmentAction::ValidateCode { code } => Some(self.validate_code(&code).await),
            EnrollmentAction::FireAlert { alert } => {
                self.ports.alerts.fire_alert(alert).await;
                debug!("enrollment action FireAlert completed");
                None
            }
        }
    }

    async fn request_secret(&self, operation: SecretOperation) -> EnrollmentEvent {
        let result = match operation {
            SecretOperation::Initiate => self.ports.verification.initiate().await,
            SecretOperation::Refresh => self.ports.verification.refresh().await,
        };

        match result {
            Ok(issue) => {
                debug!(operation = operation.as_str(), "enrollment secret issued");
                EnrollmentEvent::SecretIssued {
                    payload: issue.qr_payload,
                }
            }
            Err(err) => {
                error!(
                    operation = operation.as_str(),
                    error = %err,
                    "failed to obtain enrollment secret"
                );
                EnrollmentEvent::SecretFetchFailed {
                    error: EnrollmentError::FetchFailure {
                        operation,
                        reason: err.to_string(),
                    },
                }
            }
        }
    }

    async fn collect_code(&self) -> Option<EnrollmentEvent> {
        let fields = verification_code_form();
        match self.ports.form_engine.collect(&fields).await {
            Ok(Some(values)) => match values.get(CODE_FIELD) {
                Some(code) => Some(EnrollmentEvent::SubmitCode {
                    code: OneTimeCode::new(code),
                }),
                None => {
                    warn!(
                        field = CODE_FIELD,
                        "form engine submitted without code field"
                    );
                    None
                }
            },
            Ok(None) => {
                debug!("verification form abandoned");
                None
            }
            Err(err) => {
                error!(error = %err, "verification form failed");
                None
            }
        }
    }

    async fn validate_code(&self, code: &OneTimeCode) -> EnrollmentEvent {
        let kind = match self.ports.verification.validate(code).await {
            Ok(verdict) if verdict.is_valid => {
                debug!("one-time code accepted");
                return EnrollmentEvent::CodeAccepted;
            }
            Ok(_) => ValidationFailureKind::Rejected,
            Err(err) => ValidationFailureKind::Transport {
                reason: err.to_string(),
            },
        };

        let error = EnrollmentError::ValidationFailure { kind: kind.clone() };
        warn!(error = %error, "one-time code not verified");
        EnrollmentEvent::CodeVerificationFailed { kind }
    }
}
