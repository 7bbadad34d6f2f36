//! Stateless credential verification for downstream consumers.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::AccessClaims;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::services::token::CredentialCodec;

use super::bearer::extract_credential;
use super::Authenticator;

/// Principal synthesized from credential claims, standing in for a
/// database-backed user in services that have no user store
#[derive(Debug, Clone, PartialEq)]
pub struct TokenPrincipal {
    /// Owning user identifier
    pub user: Uuid,

    /// Profile snapshot taken when the credential was signed
    pub profile: serde_json::Value,

    /// Staff flag snapshot taken when the credential was signed
    pub staff: bool,

    /// Embedded expiry as epoch seconds
    pub expires: i64,
}

impl TokenPrincipal {
    /// Builds a principal from verified claims
    pub fn from_claims(claims: AccessClaims) -> Self {
        Self {
            user: claims.user,
            profile: claims.profile,
            staff: claims.staff,
            expires: claims.expires,
        }
    }
}

/// Verifier for deployments holding only the public key
///
/// Trusts the signature and the embedded expiry claim, nothing else: with
/// no store access it cannot observe revocation or rotation, and accepts a
/// credential until its embedded expiry passes. Keep credential lifetimes
/// short to bound that window.
pub struct StatelessVerifier {
    codec: CredentialCodec,
}

impl StatelessVerifier {
    /// Creates a new stateless verifier; the codec only needs a public key
    pub fn new(codec: CredentialCodec) -> Self {
        Self { codec }
    }

    fn denied() -> DomainError {
        DomainError::Auth(AuthError::AuthenticationFailed)
    }
}

#[async_trait]
impl Authenticator for StatelessVerifier {
    type Principal = TokenPrincipal;

    async fn authenticate(
        &self,
        authorization: Option<&str>,
    ) -> DomainResult<Option<TokenPrincipal>> {
        let credential = match extract_credential(authorization) {
            Ok(None) => return Ok(None),
            Ok(Some(credential)) => credential,
            Err(e) => {
                tracing::debug!(error = %e, "rejected authorization header");
                return Err(Self::denied());
            }
        };

        let claims = match self.codec.verify(credential) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!(error = %e, "credential failed verification");
                return Err(Self::denied());
            }
        };

        // Freshness is judged on the embedded claim, not the store
        if claims.is_expired() {
            tracing::debug!(token_id = %claims.token, cause = %TokenError::TokenExpired, "credential past embedded expiry");
            return Err(Self::denied());
        }

        Ok(Some(TokenPrincipal::from_claims(claims)))
    }
}
