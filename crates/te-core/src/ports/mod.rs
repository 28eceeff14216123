//! Port interfaces for the application layer
//!
//! Ports define the contract between the enrollment orchestrator and the
//! collaborators it drives: the identity provider's verification service,
//! the host's form engine, its notification side-channel and its renderer.
//! Infrastructure and host crates implement them.

pub mod alert;
pub mod enrollment_event;
pub mod form_engine;
pub mod verification;

pub use alert::AlertPort;
pub use enrollment_event::EnrollmentEventPort;
pub use form_engine::{FormEngineError, FormEnginePort};
pub use verification::{
    CodeVerdict, SecretIssue, VerificationServiceError, VerificationServicePort,
};
