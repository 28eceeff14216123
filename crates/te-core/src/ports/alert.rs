use crate::alert::Alert;

/// Notification side-channel of the host application.
///
/// Fire-and-forget: implementations swallow their own delivery failures.
#[async_trait::async_trait]
pub trait AlertPort: Send + Sync {
    async fn fire_alert(&self, alert: Alert);
}
