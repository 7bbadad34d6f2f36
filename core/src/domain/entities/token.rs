//! Token record entity and the claim set embedded in signed credentials.

use std::net::IpAddr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// Persisted token record backing an issued credential
///
/// A record is created at login or rotation and never deleted. Rotation
/// stamps `renewed` exactly once and links the successor back through
/// `source`, forming an append-only chain anchored at the original login.
/// `revoked` and `renewed` are write-once; the store enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Unique identifier, used as the credential's subject claim
    pub id: Uuid,

    /// User this token belongs to
    pub user_id: Uuid,

    /// Network address the issuing request came from, when known
    pub ip: Option<IpAddr>,

    /// Timestamp when the token was issued
    pub issued: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires: DateTime<Utc>,

    /// Opaque rotation secret, unique across the store; never embedded
    /// in the signed credential
    pub refresh: String,

    /// Set when the token is explicitly revoked
    pub revoked: Option<DateTime<Utc>>,

    /// Set when the token is exchanged for a successor
    pub renewed: Option<DateTime<Utc>>,

    /// Token record this one superseded, if any
    pub source: Option<Uuid>,
}

impl Token {
    /// Creates a new token record expiring `lifetime_secs` from now
    pub fn new(
        user_id: Uuid,
        ip: Option<IpAddr>,
        refresh: String,
        lifetime_secs: i64,
        source: Option<Uuid>,
    ) -> Self {
        let issued = Utc::now();
        let expires = issued + Duration::seconds(lifetime_secs);

        Self {
            id: Uuid::new_v4(),
            user_id,
            ip,
            issued,
            expires,
            refresh,
            revoked: None,
            renewed: None,
            source,
        }
    }

    /// Checks if the token record has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires
    }

    /// Checks if the token record is valid for authentication
    ///
    /// A record is valid iff it has not expired, has not been revoked,
    /// and has not been exchanged for a successor.
    pub fn is_valid(&self) -> bool {
        !self.is_expired() && self.revoked.is_none() && self.renewed.is_none()
    }

    /// Builds the claim set embedded in this record's signed credential
    ///
    /// The profile and staff fields are a snapshot of the owning user at
    /// signing time; downstream stateless consumers trust them until the
    /// credential expires.
    pub fn claims(&self, user: &User) -> AccessClaims {
        AccessClaims {
            token: self.id,
            user: user.id,
            expires: self.expires.timestamp(),
            profile: user.profile.clone(),
            staff: user.is_staff,
        }
    }
}

/// Claim set carried by a signed credential
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Token record identifier (subject)
    pub token: Uuid,

    /// Owning user identifier
    pub user: Uuid,

    /// Expiry as epoch seconds
    pub expires: i64,

    /// Snapshot of the owner's profile data at signing time
    pub profile: serde_json::Value,

    /// Snapshot of the owner's staff flag at signing time
    pub staff: bool,
}

impl AccessClaims {
    /// Checks the embedded expiry claim against the current time
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.expires
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::User;

    fn sample_token(lifetime_secs: i64) -> Token {
        Token::new(Uuid::new_v4(), None, "secret".repeat(8), lifetime_secs, None)
    }

    #[test]
    fn test_new_token_is_valid() {
        let token = sample_token(3600);

        assert!(token.expires > token.issued);
        assert!(token.revoked.is_none());
        assert!(token.renewed.is_none());
        assert!(token.source.is_none());
        assert!(!token.is_expired());
        assert!(token.is_valid());
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let mut token = sample_token(3600);
        token.expires = Utc::now() - Duration::seconds(1);

        assert!(token.is_expired());
        assert!(!token.is_valid());
    }

    #[test]
    fn test_revoked_token_is_invalid() {
        let mut token = sample_token(3600);
        token.revoked = Some(Utc::now());

        assert!(!token.is_expired());
        assert!(!token.is_valid());
    }

    #[test]
    fn test_renewed_token_is_invalid() {
        let mut token = sample_token(3600);
        token.renewed = Some(Utc::now());

        assert!(!token.is_expired());
        assert!(!token.is_valid());
    }

    #[test]
    fn test_claims_snapshot_owner() {
        let mut user = User::new("alice@example.com".to_string());
        user.is_staff = true;
        user.profile = serde_json::json!({"name": "Alice"});

        let token = Token::new(user.id, None, "r".repeat(64), 3600, None);
        let claims = token.claims(&user);

        assert_eq!(claims.token, token.id);
        assert_eq!(claims.user, user.id);
        assert_eq!(claims.expires, token.expires.timestamp());
        assert_eq!(claims.profile, user.profile);
        assert!(claims.staff);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_expiry_check() {
        let user = User::new("bob@example.com".to_string());
        let mut token = Token::new(user.id, None, "r".repeat(64), 3600, None);
        token.expires = Utc::now() - Duration::seconds(2);

        let claims = token.claims(&user);
        assert!(claims.is_expired());
    }

    #[test]
    fn test_token_serialization() {
        let token = sample_token(3600);

        let json = serde_json::to_string(&token).unwrap();
        let deserialized: Token = serde_json::from_str(&json).unwrap();

        assert_eq!(token, deserialized);
    }
}
