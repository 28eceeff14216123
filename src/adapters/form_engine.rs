use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use te_core::form::{FieldDescriptor, FormValues};
use te_core::ports::{FormEngineError, FormEnginePort};

use super::terminal::{InputSession, TerminalIo};

const MAX_ATTEMPTS_PER_FIELD: usize = 3;

/// Prompts for each field in turn and re-prompts until its checks pass.
///
/// End of input, or running out of attempts on a field, abandons the form.
pub struct TerminalFormEngine {
    io: Arc<TerminalIo>,
}

impl TerminalFormEngine {
    pub fn new(io: Arc<TerminalIo>) -> Self {
        Self { io }
    }

    async fn collect_field(
        &self,
        input: &mut InputSession<'_>,
        field: &FieldDescriptor,
    ) -> Result<Option<String>, FormEngineError> {
        let label = match field.placeholder {
            Some(placeholder) => format!("{} ({placeholder}): ", field.label),
            None => format!("{}: ", field.label),
        };

        for attempt in 1..=MAX_ATTEMPTS_PER_FIELD {
            let Some(value) = input
                .prompt(&label)
                .await
                .map_err(|e| FormEngineError::Input(e.to_string()))?
            else {
                debug!(field = field.name, "form input closed");
                return Ok(None);
            };

            let errors = field.check(&value);
            if errors.is_empty() {
                return Ok(Some(value.trim().to_string()));
            }

            debug!(field = field.name, attempt, "form field rejected");
            for message in errors {
                self.io
                    .write_line(&format!("  ! {message}"))
                    .map_err(|e| FormEngineError::Input(e.to_string()))?;
            }
        }

        warn!(
            field = field.name,
            "form abandoned after repeated invalid input"
        );
        Ok(None)
    }
}

#[async_trait]
impl FormEnginePort for TerminalFormEngine {
    async fn collect(
        &self,
        fields: &[FieldDescriptor],
    ) -> Result<Option<FormValues>, FormEngineError> {
        let mut input = self.io.claim_input().await;
        let mut values = FormValues::new();
        for field in fields {
            match self.collect_field(&mut input, field).await? {
                Some(value) => values.insert(field.name, value),
                None => return Ok(None),
            }
        }
        Ok(Some(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::terminal::test_support::SharedBuffer;
    use te_core::form::{verification_code_form, CODE_FIELD};

    fn engine(input: &'static str) -> (TerminalFormEngine, SharedBuffer) {
        let out = SharedBuffer::default();
        let io = Arc::new(TerminalIo::new(input.as_bytes(), out.clone()));
        (TerminalFormEngine::new(io), out)
    }

    #[tokio::test]
    async fn collects_trimmed_code() {
        let (engine, _) = engine(" 123456 \n");

        let values = engine
            .collect(&verification_code_form())
            .await
            .unwrap()
            .expect("form submitted");

        assert_eq!(values.get(CODE_FIELD), Some("123456"));
    }

    #[tokio::test]
    async fn reprompts_with_required_error() {
        let (engine, out) = engine("\n654321\n");

        let values = engine.collect(&verification_code_form()).await.unwrap();

        assert_eq!(values.unwrap().get(CODE_FIELD), Some("654321"));
        assert!(out.contents().contains("Verification code is required"));
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let (engine, _) = engine("\n\n\n123456\n");

        let values = engine.collect(&verification_code_form()).await.unwrap();

        assert!(values.is_none());
    }

    #[tokio::test]
    async fn end_of_input_abandons_form() {
        let (engine, _) = engine("");

        assert!(engine
            .collect(&verification_code_form())
            .await
            .unwrap()
            .is_none());
    }
}
