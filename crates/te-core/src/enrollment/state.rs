use serde::Serialize;

use crate::secret::QrPayload;

/// Position in the linear enrollment flow.
///
/// 注册流程所处的步骤。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WizardStep {
    /// 展示二维码，等待用户扫描
    AwaitingSecret,

    /// 等待用户输入一次性验证码
    AwaitingCode,

    /// 注册完成
    Completed,
}

/// Wizard state owned by the enrollment orchestrator.
///
/// 注册向导状态：关闭即重置，不跨会话保留。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardState {
    pub is_open: bool,
    pub step: WizardStep,
    /// Present once a secret has been issued; replaced wholesale on refresh.
    pub secret_payload: Option<QrPayload>,
    pub verification_failed: bool,
}

impl WizardState {
    /// State of a freshly opened wizard before any secret arrives.
    pub fn opened() -> Self {
        Self {
            is_open: true,
            ..Self::default()
        }
    }

    pub fn is_at(&self, step: WizardStep) -> bool {
        self.is_open && self.step == step
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            is_open: false,
            step: WizardStep::AwaitingSecret,
            secret_payload: None,
            verification_failed: false,
        }
    }
}
