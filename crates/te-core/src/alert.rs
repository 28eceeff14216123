//! Alerts pushed to the host application through the notification side-channel.

use serde::{Deserialize, Serialize};

/// Alert severity understood by the host console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Success,
    Error,
    Warning,
    Info,
}

/// A fire-and-forget notification.
///
/// `message` is the short headline, `description` carries the detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub description: String,
    pub level: AlertLevel,
    pub message: String,
}

impl Alert {
    pub fn error(message: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            level: AlertLevel::Error,
            message: message.into(),
        }
    }
}
