// Tue Jan 13 2026 - Alex

use crate::declarations::DeclarationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Declaration(#[from] DeclarationError),
    #[error("Invariant violated while exporting {class}: {message}")]
    InvariantViolation { class: String, message: String },
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ExportError {
    pub fn invariant(class: &str, message: &str) -> Self {
        ExportError::InvariantViolation {
            class: class.to_string(),
            message: message.to_string(),
        }
    }
}
