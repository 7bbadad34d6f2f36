//! Error type definitions for authentication and token management.
//!
//! The verifiers deliberately collapse every failure cause into
//! `AuthError::AuthenticationFailed` before it reaches an unauthenticated
//! caller; the finer-grained variants below exist for internal logging and
//! for callers that legitimately need to distinguish "expired" from
//! "invalid" (e.g. a refresh endpoint prompting for re-login).

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Malformed authorization header")]
    InvalidAuthorizationHeader,

    #[error("User not found")]
    UserNotFound,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Unsupported signing algorithm")]
    UnsupportedAlgorithm,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Signing key unavailable")]
    SigningKeyUnavailable,

    #[error("Key loading failed: {message}")]
    KeyLoadError { message: String },
}
