use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use te_core::alert::{Alert, AlertLevel};
use te_core::ports::AlertPort;

use super::terminal::TerminalIo;

/// Prints alerts as a banner between the rendered wizard steps.
pub struct TerminalAlertSink {
    io: Arc<TerminalIo>,
}

impl TerminalAlertSink {
    pub fn new(io: Arc<TerminalIo>) -> Self {
        Self { io }
    }
}

pub fn format_alert(alert: &Alert) -> Vec<String> {
    let tag = match alert.level {
        AlertLevel::Success => "OK",
        AlertLevel::Error => "ERROR",
        AlertLevel::Warning => "WARN",
        AlertLevel::Info => "INFO",
    };
    vec![
        format!("[{tag}] {}", alert.message),
        format!("        {}", alert.description),
    ]
}

#[async_trait]
impl AlertPort for TerminalAlertSink {
    async fn fire_alert(&self, alert: Alert) {
        if let Err(err) = self.io.write_lines(format_alert(&alert)) {
            warn!(error = %err, message = %alert.message, "failed to print alert");
        }
    }
}
