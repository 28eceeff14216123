//! Infrastructure adapters for TOTP enrollment.
//!
//! Implements the `te-core` verification service port over the identity
//! provider's REST API.

pub mod verification;

pub use verification::HttpVerificationService;
