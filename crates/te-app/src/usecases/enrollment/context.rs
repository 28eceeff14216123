use te_core::enrollment::WizardState;
use tokio::sync::{Mutex, MutexGuard};

/// Wizard state tagged with the session that produced it.
///
/// `epoch` advances on every `open` and `close`; a service result carries the
/// epoch its call started in and is dropped once the two differ.
pub(crate) struct Session {
    pub(crate) state: WizardState,
    pub(crate) epoch: u64,
}

/// Shared enrollment context.
///
/// The lock covers one transition and its state publication only. Service
/// calls and form collection run without it, so `close` never waits behind a
/// pending request.
pub struct EnrollmentContext {
    session: Mutex<Session>,
}

impl EnrollmentContext {
    pub fn new(initial_state: WizardState) -> Self {
        Self {
            session: Mutex::new(Session {
                state: initial_state,
                epoch: 0,
            }),
        }
    }

    pub async fn get_state(&self) -> WizardState {
        self.session.lock().await.state.clone()
    }

    pub(crate) async fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().await
    }
}

impl Default for EnrollmentContext {
    fn default() -> Self {
        Self::new(WizardState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_closed_at_epoch_zero() {
        let context = EnrollmentContext::default();
        assert_eq!(context.get_state().await, WizardState::default());
        assert_eq!(context.session().await.epoch, 0);
    }
}
