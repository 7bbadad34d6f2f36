//! Domain-specific error types and error handling.

mod types;


// Re-export all error types
pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;
