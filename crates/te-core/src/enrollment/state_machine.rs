//! Enrollment state machine.
//!
//! Defines a pure state transition function for the authenticator-app
//! enrollment wizard. Service calls, form collection and alerts are returned
//! as actions and executed by the orchestrator.

use tracing::debug;

use crate::alert::Alert;
use crate::enrollment::{
    EnrollmentAction, EnrollmentError, EnrollmentEvent, WizardState, WizardStep,
};

const FETCH_FAILURE_MESSAGE: &str = "Something went wrong";

/// Pure enrollment state machine.
///
/// 纯状态机：不包含副作用。
pub struct EnrollmentStateMachine;

impl EnrollmentStateMachine {
    pub fn transition(
        state: WizardState,
        event: EnrollmentEvent,
    ) -> (WizardState, Vec<EnrollmentAction>) {
        match (state.step, event) {
            // ===== Open / Close =====
            (_, EnrollmentEvent::Open) => {
                (WizardState::opened(), vec![EnrollmentAction::InitiateSecret])
            }
            (_, EnrollmentEvent::Close) => (WizardState::default(), Vec::new()),
            (_, event) if !state.is_open => ignore(state, event),

            // ===== Secret =====
            (
                WizardStep::AwaitingSecret | WizardStep::AwaitingCode,
                EnrollmentEvent::FetchSecret,
            ) => (state, vec![EnrollmentAction::InitiateSecret]),
            (WizardStep::AwaitingSecret, EnrollmentEvent::RefreshSecret) => {
                (state, vec![EnrollmentAction::RefreshSecret])
            }
            (
                WizardStep::AwaitingSecret | WizardStep::AwaitingCode,
                EnrollmentEvent::SecretIssued { payload },
            ) => (
                WizardState {
                    secret_payload: Some(payload),
                    verification_failed: false,
                    ..state
                },
                Vec::new(),
            ),
            (_, EnrollmentEvent::SecretFetchFailed { error }) => (
                state,
                vec![EnrollmentAction::FireAlert {
                    alert: fetch_failure_alert(&error),
                }],
            ),

            // ===== Advance =====
            (WizardStep::AwaitingSecret, EnrollmentEvent::Advance) => (
                WizardState {
                    step: WizardStep::AwaitingCode,
                    ..state
                },
                Vec::new(),
            ),
            (WizardStep::AwaitingCode, EnrollmentEvent::Advance) => {
                (state, vec![EnrollmentAction::CollectCode])
            }
            (WizardStep::Completed, EnrollmentEvent::Advance) => {
                (WizardState::default(), Vec::new())
            }

            // ===== Code =====
            (WizardStep::AwaitingCode, EnrollmentEvent::SubmitCode { code }) => {
                if code.is_empty() {
                    // The form engine's required rule owns this case.
                    debug!("empty one-time code dropped before validation");
                    return (state, Vec::new());
                }
                (
                    WizardState {
                        verification_failed: false,
                        ..state
                    },
                    vec![EnrollmentAction::ValidateCode { code }],
                )
            }
            (WizardStep::AwaitingCode, EnrollmentEvent::CodeAccepted) => (
                WizardState {
                    step: WizardStep::Completed,
                    verification_failed: false,
                    ..state
                },
                Vec::new(),
            ),
            (WizardStep::AwaitingCode, EnrollmentEvent::CodeVerificationFailed { .. }) => (
                WizardState {
                    verification_failed: true,
                    ..state
                },
                Vec::new(),
            ),
            (_, EnrollmentEvent::RetryFromScan) if state.verification_failed => (
                WizardState {
                    step: WizardStep::AwaitingSecret,
                    verification_failed: false,
                    ..state
                },
                Vec::new(),
            ),

            (_, event) => ignore(state, event),
        }
    }
}

fn ignore(state: WizardState, event: EnrollmentEvent) -> (WizardState, Vec<EnrollmentAction>) {
    debug!(
        is_open = state.is_open,
        step = ?state.step,
        event = ?event,
        "enrollment event ignored in current state"
    );
    (state, Vec::new())
}

fn fetch_failure_alert(error: &EnrollmentError) -> Alert {
    Alert::error(
        FETCH_FAILURE_MESSAGE,
        format!("An error occurred while setting up the authenticator app: {error}"),
    )
}
