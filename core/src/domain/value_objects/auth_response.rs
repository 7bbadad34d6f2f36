//! Authentication response value objects.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::token::AccessClaims;

/// Complete credential set returned after login or rotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Owning user identifier
    pub user: Uuid,

    /// Signed credential string
    pub token: String,

    /// Credential expiry as epoch seconds
    pub expires: i64,

    /// Opaque rotation secret for obtaining a successor credential
    pub refresh: String,
}

impl AuthResponse {
    /// Creates a new authentication response
    pub fn new(user: Uuid, token: String, expires: i64, refresh: String) -> Self {
        Self {
            user,
            token,
            expires,
            refresh,
        }
    }
}

/// Result of inspecting a credential against the token store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inspection {
    /// Whether the backing record is currently valid
    pub valid: bool,

    /// Claims decoded from the credential
    pub claims: AccessClaims,
}
