//! Enrollment domain module.
//!
//! This module defines the authenticator-app enrollment wizard state machine types.

mod action;
mod error;
mod event;
mod state;
pub mod state_machine;
pub mod view;

pub use action::EnrollmentAction;
pub use error::{EnrollmentError, SecretOperation, ValidationFailureKind};
pub use event::EnrollmentEvent;
pub use state::{WizardState, WizardStep};
pub use state_machine::EnrollmentStateMachine;
pub use view::{Illustration, PrimaryAction, StepView};
