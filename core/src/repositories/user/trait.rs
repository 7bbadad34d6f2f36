//! User repository trait.
//!
//! The user store is owned by an external collaborator; the token engine
//! only ever reads users by identifier, to hydrate a principal from current
//! database state in the authoritative verification path.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User reads
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;
}
