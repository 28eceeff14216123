//! # te-core
//!
//! Core domain models and business logic for authenticator-app (TOTP) enrollment.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod alert;
pub mod config;
pub mod enrollment;
pub mod form;
pub mod ports;
pub mod secret;

// Re-export commonly used types at the crate root
pub use alert::{Alert, AlertLevel};
pub use config::{AuthenticatorApp, EnrollmentConfig, ServiceConfig};
pub use enrollment::{
    EnrollmentAction, EnrollmentError, EnrollmentEvent, EnrollmentStateMachine, StepView,
    WizardState, WizardStep,
};
pub use secret::{OneTimeCode, QrPayload};
