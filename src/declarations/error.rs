// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeclarationError {
    #[error("Declaration not found: {0}")]
    NotFound(String),
    #[error("Declaration is not a class: {0}")]
    NotAClass(String),
    #[error("Declaration is not a function: {0}")]
    NotAFunction(String),
    #[error("Typedef chain does not end in a class: {0}")]
    TypedefCycle(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
