//! In-memory implementation of UserRepository for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::r#trait::UserRepository;

/// Mock user repository
///
/// Clones share the same underlying store.
#[derive(Clone)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert or replace a user
    pub async fn put(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }
}
