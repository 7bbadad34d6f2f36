//! # Vouch Core
//!
//! Core token lifecycle and verification engine for the Vouch auth service.
//! This crate contains the domain entities (token records, users), the
//! credential codec and verification-code signer, repository interfaces,
//! the token lifecycle service, and the two credential verifiers.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

#[cfg(test)]
pub(crate) mod test_keys;

// Re-export commonly used types for convenience
pub use domain::entities::token::{AccessClaims, Token};
pub use domain::entities::user::{User, UserStatus};
pub use domain::value_objects::auth_response::{AuthResponse, Inspection};
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::{
    MockTokenRepository, MockUserRepository, TokenRepository, UserRepository,
};
pub use services::token::{CredentialCodec, CredentialKeys, TokenService};
pub use services::verification::{
    VerificationSigner, PURPOSE_RESET_PASSWORD, PURPOSE_VERIFY_EMAIL,
};
pub use services::verifier::{
    Authenticator, AuthoritativeVerifier, StatelessVerifier, TokenPrincipal, AUTH_SCHEME,
};
