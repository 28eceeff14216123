use serde::{Deserialize, Serialize};

/// Which verification service call produced a secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecretOperation {
    Initiate,
    Refresh,
}

impl SecretOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecretOperation::Initiate => "initiate",
            SecretOperation::Refresh => "refresh",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationFailureKind {
    /// The service answered `isValid = false`.
    Rejected,
    /// The validate call itself failed.
    Transport { reason: String },
}

/// Enrollment error types.
///
/// 注册错误类型。`FetchFailure` 通过告警通道上报，`ValidationFailure` 在向导内显示。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum EnrollmentError {
    #[error("failed to {} enrollment secret: {reason}", .operation.as_str())]
    FetchFailure {
        operation: SecretOperation,
        reason: String,
    },
    #[error("code verification failed: {kind:?}")]
    ValidationFailure { kind: ValidationFailureKind },
}
