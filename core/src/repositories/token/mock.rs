//! In-memory implementation of TokenRepository for testing.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::Token;
use crate::errors::DomainError;

use super::r#trait::TokenRepository;

/// Mock token repository keyed by record id, with a refresh-secret index
///
/// Clones share the same underlying store.
#[derive(Clone)]
pub struct MockTokenRepository {
    tokens: Arc<RwLock<HashMap<Uuid, Token>>>,
}

impl MockTokenRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored records (including invalid ones)
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

impl Default for MockTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn insert(&self, token: Token) -> Result<Token, DomainError> {
        let mut tokens = self.tokens.write().await;

        // The refresh column carries a unique constraint
        if tokens.values().any(|t| t.refresh == token.refresh) {
            return Err(DomainError::Conflict {
                message: "duplicate rotation secret".to_string(),
            });
        }

        tokens.insert(token.id, token.clone());
        Ok(token)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Token>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(&id).cloned())
    }

    async fn find_by_refresh(&self, refresh: &str) -> Result<Option<Token>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.values().find(|t| t.refresh == refresh).cloned())
    }

    async fn mark_renewed(&self, id: Uuid, at: DateTime<Utc>) -> Result<bool, DomainError> {
        // Conditional update under the write lock: only one concurrent
        // caller can observe the unrenewed, unrevoked state.
        let mut tokens = self.tokens.write().await;

        match tokens.get_mut(&id) {
            Some(token) if token.renewed.is_none() && token.revoked.is_none() => {
                token.renewed = Some(at);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn mark_revoked(&self, id: Uuid, at: DateTime<Utc>) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.write().await;

        match tokens.get_mut(&id) {
            Some(token) => {
                if token.revoked.is_none() {
                    token.revoked = Some(at);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
