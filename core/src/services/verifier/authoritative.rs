//! Authoritative credential verification backed by the token store.

use async_trait::async_trait;

use crate::domain::entities::token::Token;
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::token::CredentialCodec;

use super::bearer::extract_credential;
use super::Authenticator;

/// Verifier that consults the token store on every authentication
///
/// Observes revocation and rotation, and hydrates the principal from the
/// current user row rather than the snapshot embedded in the credential.
/// Every failure cause is collapsed into one uniform rejection so
/// unauthenticated callers cannot probe which tokens exist or why one was
/// refused; the specific reason is only logged.
pub struct AuthoritativeVerifier<R: TokenRepository, U: UserRepository> {
    tokens: R,
    users: U,
    codec: CredentialCodec,
}

impl<R: TokenRepository, U: UserRepository> AuthoritativeVerifier<R, U> {
    /// Creates a new authoritative verifier
    pub fn new(tokens: R, users: U, codec: CredentialCodec) -> Self {
        Self {
            tokens,
            users,
            codec,
        }
    }

    fn denied() -> DomainError {
        DomainError::Auth(AuthError::AuthenticationFailed)
    }
}

#[async_trait]
impl<R: TokenRepository, U: UserRepository> Authenticator for AuthoritativeVerifier<R, U> {
    type Principal = (User, Token);

    async fn authenticate(
        &self,
        authorization: Option<&str>,
    ) -> DomainResult<Option<(User, Token)>> {
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

        let record = self
            .tokens
            .find_by_id(claims.token)
            .await
            .map_err(|_| Self::denied())?;

        let Some(token) = record else {
            tracing::debug!(token_id = %claims.token, "credential references unknown record");
            return Err(Self::denied());
        };

        if token.is_expired() {
            tracing::debug!(token_id = %token.id, cause = %TokenError::TokenExpired, "token record rejected");
            return Err(Self::denied());
        }
        if token.revoked.is_some() {
            tracing::debug!(token_id = %token.id, cause = %TokenError::TokenRevoked, "token record rejected");
            return Err(Self::denied());
        }
        if token.renewed.is_some() {
            tracing::debug!(token_id = %token.id, "token record superseded by rotation");
            return Err(Self::denied());
        }

        // Hydrate from current database state; the embedded profile and
        // staff snapshot may be stale.
        let user = self
            .users
            .find_by_id(token.user_id)
            .await
            .map_err(|_| Self::denied())?;

        let Some(user) = user else {
            tracing::debug!(user_id = %token.user_id, cause = %AuthError::UserNotFound, "token owner no longer exists");
            return Err(Self::denied());
        };

        Ok(Some((user, token)))
    }
}
