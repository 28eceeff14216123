//! TOTP enrollment application orchestration layer
//!
//! This crate contains the enrollment use cases: it drives the pure
//! `te-core` state machine and executes the side effects it requests.

pub mod deps;
pub mod usecases;

pub use deps::EnrollmentPorts;
pub use usecases::enrollment::{EnrollmentContext, EnrollmentOrchestrator};
