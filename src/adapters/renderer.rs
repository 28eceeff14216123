use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use te_core::config::AuthenticatorApp;
use te_core::enrollment::{Illustration, StepView, WizardState};
use te_core::ports::EnrollmentEventPort;

use super::terminal::TerminalIo;

/// Redraws the current wizard step whenever the orchestrator publishes a state.
pub struct TerminalRenderer {
    io: Arc<TerminalIo>,
    authenticator_apps: Vec<AuthenticatorApp>,
}

impl TerminalRenderer {
    pub fn new(io: Arc<TerminalIo>, authenticator_apps: Vec<AuthenticatorApp>) -> Self {
        Self {
            io,
            authenticator_apps,
        }
    }
}

/// Text rendering of one wizard state, including the commands it accepts.
pub fn render_state(state: &WizardState, authenticator_apps: &[AuthenticatorApp]) -> Vec<String> {
    if !state.is_open {
        return vec!["Authenticator app setup is closed. [o] open  [q] quit".to_string()];
    }

    let view = StepView::for_state(state);
    let mut lines = vec![String::new(), "== Set up an authenticator app ==".to_string()];

    match view.illustration {
        Some(Illustration::QrCodeScan) => lines.push("(scan)".to_string()),
        Some(Illustration::EnterCode) => lines.push("(code)".to_string()),
        None => {}
    }
    if let Some(heading) = view.heading {
        lines.push(heading.to_string());
    }

    if view.show_regenerate {
        match &state.secret_payload {
            Some(payload) => lines.push(format!("  {}", payload.expose())),
            None => lines.push("  QR code not available yet. [f] fetch again".to_string()),
        }
    }

    if view.show_authenticator_apps && !authenticator_apps.is_empty() {
        lines.push("Don't have an authenticator app? Try one of these:".to_string());
        lines.extend(
            authenticator_apps
                .iter()
                .map(|app| format!("  - {} <{}>", app.name, app.link)),
        );
    }

    if view.show_rescan_prompt {
        lines.push("The code could not be verified. [r] scan the QR code again".to_string());
    }

    if view.illustration.is_none() {
        lines.push("Your authenticator app is ready to use.".to_string());
    }

    let mut commands = vec![format!("[c] {}", view.primary.label())];
    if view.show_regenerate {
        commands.push("[g] Generate a new QR code".to_string());
    }
    if view.show_cancel {
        commands.push("[x] Cancel".to_string());
    }
    lines.push(commands.join("  "));

    lines
}

#[async_trait]
impl EnrollmentEventPort for TerminalRenderer {
    async fn emit_wizard_state_changed(&self, state: WizardState) {
        if let Err(err) = self
            .io
            .write_lines(render_state(&state, &self.authenticator_apps))
        {
            warn!(error = %err, "failed to render wizard state");
        }
    }
}
