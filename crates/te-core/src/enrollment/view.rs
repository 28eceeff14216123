//! Per-step presentation facts for hosts rendering the wizard.

use serde::Serialize;

use crate::enrollment::{WizardState, WizardStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Illustration {
    QrCodeScan,
    EnterCode,
}

/// What the primary wizard button does on a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PrimaryAction {
    Continue,
    Verify,
    Done,
}

impl PrimaryAction {
    pub fn label(&self) -> &'static str {
        match self {
            PrimaryAction::Continue => "Continue",
            PrimaryAction::Verify => "Verify",
            PrimaryAction::Done => "Done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub illustration: Option<Illustration>,
    pub heading: Option<&'static str>,
    pub primary: PrimaryAction,
    pub show_cancel: bool,
    /// Offer "generate a new QR code".
    pub show_regenerate: bool,
    /// List recommended authenticator apps under the QR code.
    pub show_authenticator_apps: bool,
    /// Offer "scan the QR code again" after a failed verification.
    pub show_rescan_prompt: bool,
}

impl StepView {
    pub fn for_state(state: &WizardState) -> Self {
        match state.step {
            WizardStep::AwaitingSecret => Self {
                illustration: Some(Illustration::QrCodeScan),
                heading: Some("Scan the QR code using an authenticator app"),
                primary: PrimaryAction::Continue,
                show_cancel: true,
                show_regenerate: true,
                show_authenticator_apps: true,
                show_rescan_prompt: false,
            },
            WizardStep::AwaitingCode => Self {
                illustration: Some(Illustration::EnterCode),
                heading: Some("Enter the generated code to verify"),
                primary: PrimaryAction::Verify,
                show_cancel: true,
                show_regenerate: false,
                show_authenticator_apps: false,
                show_rescan_prompt: state.verification_failed,
            },
            WizardStep::Completed => Self {
                illustration: None,
                heading: None,
                primary: PrimaryAction::Done,
                show_cancel: false,
                show_regenerate: false,
                show_authenticator_apps: false,
                show_rescan_prompt: false,
            },
        }
    }
}
