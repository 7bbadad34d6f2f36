//! Credential verifiers
//!
//! Two implementations of one verification capability, selected by which
//! deployment holds token-store access:
//!
//! - [`AuthoritativeVerifier`] consults the token store, so it observes
//!   revocation and rotation, and hydrates the principal from the current
//!   user row.
//! - [`StatelessVerifier`] runs in downstream services holding only the
//!   public key; it trusts the signature and the embedded expiry claim and
//!   synthesizes the principal from the claims themselves.
//!
//! The failure and trust semantics genuinely differ, so these are separate
//! types rather than one code path with a runtime flag.

mod authoritative;
mod bearer;
mod stateless;

#[cfg(test)]
mod tests;

use async_trait::async_trait;

use crate::errors::DomainResult;

pub use authoritative::AuthoritativeVerifier;
pub use bearer::{extract_credential, AUTH_SCHEME};
pub use stateless::{StatelessVerifier, TokenPrincipal};

/// Capability of turning an authorization header into a principal
///
/// `Ok(None)` means no credential was offered and the caller may fall
/// through to another authentication method; `Err` is a hard failure.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Principal produced on successful authentication
    type Principal;

    /// Authenticates the bearer credential in an authorization header value
    async fn authenticate(
        &self,
        authorization: Option<&str>,
    ) -> DomainResult<Option<Self::Principal>>;
}
