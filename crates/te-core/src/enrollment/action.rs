use crate::alert::Alert;
use crate::secret::OneTimeCode;

/// Side-effects produced by state transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentAction {
    /// Ask the verification service for a new enrollment secret.
    InitiateSecret,

    /// Ask the verification service to regenerate the enrollment secret.
    RefreshSecret,

    /// Hand the verification form to the form engine and submit what it returns.
    CollectCode,

    /// Validate a one-time code against the verification service.
    ValidateCode { code: OneTimeCode },

    /// Notify the host application.
    FireAlert { alert: Alert },
}
