use crate::enrollment::{EnrollmentError, ValidationFailureKind};
use crate::secret::{OneTimeCode, QrPayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentEvent {
    // User intents
    Open,
    FetchSecret,
    RefreshSecret,
    Advance,
    SubmitCode { code: OneTimeCode },
    RetryFromScan,
    Close,

    // Results (from orchestrator)
    SecretIssued { payload: QrPayload },
    SecretFetchFailed { error: EnrollmentError },
    CodeAccepted,
    CodeVerificationFailed { kind: ValidationFailureKind },
}
