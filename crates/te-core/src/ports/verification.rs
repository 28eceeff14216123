use async_trait::async_trait;
use thiserror::Error;

use crate::secret::{OneTimeCode, QrPayload};

/// Enrollment secret issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretIssue {
    pub qr_payload: QrPayload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeVerdict {
    pub is_valid: bool,
}

#[derive(Debug, Error)]
pub enum VerificationServiceError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected status: {0}")]
    UnexpectedStatus(u16),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("service returned an empty QR payload")]
    EmptyPayload,
}

/// Identity provider operations backing the enrollment wizard.
///
/// Error semantics:
/// - Any `Err` from `initiate` / `refresh` is a fetch failure
/// - An `Err` from `validate` counts the same as `is_valid = false`
#[async_trait]
pub trait VerificationServicePort: Send + Sync {
    async fn initiate(&self) -> Result<SecretIssue, VerificationServiceError>;

    async fn refresh(&self) -> Result<SecretIssue, VerificationServiceError>;

    async fn validate(&self, code: &OneTimeCode) -> Result<CodeVerdict, VerificationServiceError>;
}
