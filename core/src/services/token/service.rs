//! Token lifecycle service: issuance, rotation, revocation, inspection.

use std::net::IpAddr;

use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use uuid::Uuid;

use vouch_shared::config::TokenConfig;

use crate::domain::entities::token::Token;
use crate::domain::entities::user::User;
use crate::domain::value_objects::auth_response::{AuthResponse, Inspection};
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::TokenRepository;

use super::codec::CredentialCodec;

/// Upper bound on regenerate-and-retry attempts when a freshly generated
/// rotation secret collides with an existing record
const MAX_SECRET_ATTEMPTS: usize = 8;

/// Service governing the persisted token lifecycle
pub struct TokenService<R: TokenRepository> {
    repository: R,
    codec: CredentialCodec,
    config: TokenConfig,
}

impl<R: TokenRepository> TokenService<R> {
    /// Creates a new token service
    pub fn new(repository: R, codec: CredentialCodec, config: TokenConfig) -> Self {
        Self {
            repository,
            codec,
            config,
        }
    }

    /// Returns the credential codec used for signing
    pub fn codec(&self) -> &CredentialCodec {
        &self.codec
    }

    /// Issues a new token record for a user
    ///
    /// Generates a fresh identifier and a fresh rotation secret; a secret
    /// that collides with an existing record is silently regenerated, up to
    /// a bounded number of attempts.
    pub async fn issue(
        &self,
        user_id: Uuid,
        ip: Option<IpAddr>,
        source: Option<Uuid>,
    ) -> DomainResult<Token> {
        for _ in 0..MAX_SECRET_ATTEMPTS {
            let token = Token::new(
                user_id,
                ip,
                self.generate_refresh_secret(),
                self.config.lifetime_secs,
                source,
            );

            match self.repository.insert(token).await {
                Ok(token) => {
                    tracing::debug!(token_id = %token.id, %user_id, "issued token");
                    return Ok(token);
                }
                Err(DomainError::Conflict { .. }) => {
                    tracing::warn!(%user_id, "rotation secret collision, regenerating");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        Err(DomainError::Internal {
            message: "exhausted rotation secret generation attempts".to_string(),
        })
    }

    /// Exchanges a rotation secret for a successor token record
    ///
    /// The `renewed` marker is stamped through an atomic conditional update,
    /// so concurrent attempts on the same secret produce exactly one
    /// successor; every failure mode reports the same error to avoid
    /// leaking which secrets exist.
    ///
    /// The marker stamp and the successor insert are separate writes. If the
    /// insert fails between them, the predecessor stays renewed with no
    /// successor and the secret is permanently spent; the caller must log in
    /// again.
    pub async fn rotate(&self, refresh: &str, ip: Option<IpAddr>) -> DomainResult<Token> {
        let token = self
            .repository
            .find_by_refresh(refresh)
            .await?
            .ok_or(DomainError::Token(TokenError::InvalidRefreshToken))?;

        if !self.repository.mark_renewed(token.id, Utc::now()).await? {
            tracing::debug!(token_id = %token.id, "rotation lost to a prior renew or revoke");
            return Err(DomainError::Token(TokenError::InvalidRefreshToken));
        }

        let successor = self.issue(token.user_id, ip, Some(token.id)).await?;
        tracing::debug!(
            token_id = %successor.id,
            source = %token.id,
            "rotated token"
        );
        Ok(successor)
    }

    /// Revokes the token record identified by a rotation secret
    ///
    /// Idempotent: revoking an already-revoked record still reports success.
    /// Returns whether a record was found.
    pub async fn revoke(&self, refresh: &str) -> DomainResult<bool> {
        let Some(token) = self.repository.find_by_refresh(refresh).await? else {
            return Ok(false);
        };

        let found = self.repository.mark_revoked(token.id, Utc::now()).await?;
        if found {
            tracing::debug!(token_id = %token.id, "revoked token");
        }
        Ok(found)
    }

    /// Fetches a token record by identifier
    pub async fn lookup(&self, id: Uuid) -> DomainResult<Option<Token>> {
        self.repository.find_by_id(id).await
    }

    /// Packages a token record into the credential set returned to callers
    pub fn auth_response(&self, token: &Token, user: &User) -> DomainResult<AuthResponse> {
        let credential = self.codec.sign(token, user)?;
        Ok(AuthResponse::new(
            user.id,
            credential,
            token.expires.timestamp(),
            token.refresh.clone(),
        ))
    }

    /// Issues a token for a freshly authenticated user and returns the
    /// complete credential set
    pub async fn login(&self, user: &User, ip: Option<IpAddr>) -> DomainResult<AuthResponse> {
        let token = self.issue(user.id, ip, None).await?;
        self.auth_response(&token, user)
    }

    /// Inspects a credential against the token store
    ///
    /// Returns `None` when the credential cannot be decoded or no backing
    /// record exists; otherwise reports the record's current validity
    /// alongside the decoded claims.
    pub async fn inspect(&self, credential: &str) -> DomainResult<Option<Inspection>> {
        let claims = match self.codec.verify(credential) {
            Ok(claims) => claims,
            Err(_) => return Ok(None),
        };

        let Some(token) = self.repository.find_by_id(claims.token).await? else {
            return Ok(None);
        };

        Ok(Some(Inspection {
            valid: token.is_valid(),
            claims,
        }))
    }

    fn generate_refresh_secret(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(self.config.refresh_secret_length)
            .map(char::from)
            .collect()
    }
}
