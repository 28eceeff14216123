use crate::enrollment::WizardState;

#[async_trait::async_trait]
pub trait EnrollmentEventPort: Send + Sync {
    async fn emit_wizard_state_changed(&self, state: WizardState);
}
