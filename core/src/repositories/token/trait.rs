//! Token repository trait defining the interface for token record persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::token::Token;
use crate::errors::DomainError;

/// Repository trait for Token record persistence
///
/// Records are append-only: once inserted they are only ever mutated by the
/// two write-once markers below, and never deleted (the rotation chain is
/// retained for audit).
///
/// # Concurrency
/// `mark_renewed` must be an atomic conditional update so that concurrent
/// rotation attempts on the same record produce exactly one winner. A SQL
/// implementation would express it as
/// `UPDATE tokens SET renewed = ? WHERE id = ? AND renewed IS NULL AND revoked IS NULL`.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Insert a new token record
    ///
    /// # Returns
    /// * `Ok(Token)` - The persisted record
    /// * `Err(DomainError::Conflict)` - The rotation secret collided with an
    ///   existing record; the caller regenerates and retries
    async fn insert(&self, token: Token) -> Result<Token, DomainError>;

    /// Find a token record by its identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Token>, DomainError>;

    /// Find a token record by its rotation secret
    async fn find_by_refresh(&self, refresh: &str) -> Result<Option<Token>, DomainError>;

    /// Atomically stamp `renewed` on a record that is neither renewed nor
    /// revoked
    ///
    /// # Returns
    /// * `Ok(true)` - This call won the conditional update
    /// * `Ok(false)` - Record missing, already renewed, or already revoked
    async fn mark_renewed(&self, id: Uuid, at: DateTime<Utc>) -> Result<bool, DomainError>;

    /// Stamp `revoked` on a record
    ///
    /// Idempotent: the timestamp is write-once, but revoking an already
    /// revoked record still reports success.
    ///
    /// # Returns
    /// * `Ok(true)` - Record exists (revoked now or previously)
    /// * `Ok(false)` - No record with this identifier
    async fn mark_revoked(&self, id: Uuid, at: DateTime<Utc>) -> Result<bool, DomainError>;
}
