//! Enrollment use cases.
//!
//! This module exposes the enrollment orchestrator and its shared context.

mod context;
pub mod orchestrator;

pub use context::EnrollmentContext;
pub use orchestrator::EnrollmentOrchestrator;
