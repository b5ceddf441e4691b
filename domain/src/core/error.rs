//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Unknown intent: {0}")]
    UnknownIntent(String),

    #[error("Invalid trigger keyword: {0:?}")]
    InvalidKeyword(String),
}
