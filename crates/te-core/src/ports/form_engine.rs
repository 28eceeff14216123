use async_trait::async_trait;
use thiserror::Error;

use crate::form::{FieldDescriptor, FormValues};

#[derive(Debug, Error)]
pub enum FormEngineError {
    #[error("form input unavailable: {0}")]
    Input(String),

    #[error("form engine failed: {0}")]
    Other(String),
}

/// Collects and validates user input for a set of fields.
#[async_trait]
pub trait FormEnginePort: Send + Sync {
    /// Run the form once.
    ///
    /// Returns `Ok(None)` when the user abandons the form; otherwise every
    /// descriptor's checks have passed and the values are keyed by field name.
    async fn collect(
        &self,
        fields: &[FieldDescriptor],
    ) -> Result<Option<FormValues>, FormEngineError>;
}
