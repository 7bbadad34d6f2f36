//! User entity as seen by the token engine.
//!
//! The user table itself is owned by an external collaborator; this entity
//! mirrors the fields the verifiers and credential codec need: identity,
//! profile snapshot, staff flag, and account status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Locked,
    Disabled,
}

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address used as the account identifier
    pub email: String,

    /// Whether the email address has been verified
    pub verified: bool,

    /// Free-form profile data
    pub profile: serde_json::Value,

    /// Account status
    pub status: UserStatus,

    /// Whether the user can use staff-only operations
    pub is_staff: bool,

    /// Timestamp when the account was created
    pub join_date: DateTime<Utc>,

    /// Timestamp of the user's last login
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a new active, unverified user
    pub fn new(email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            verified: false,
            profile: serde_json::Value::Object(serde_json::Map::new()),
            status: UserStatus::Active,
            is_staff: false,
            join_date: Utc::now(),
            last_login: None,
        }
    }

    /// Checks if the account is active
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Marks the email address as verified
    pub fn verify(&mut self) {
        self.verified = true;
    }

    /// Updates the last login timestamp
    pub fn update_last_login(&mut self) {
        self.last_login = Some(Utc::now());
    }
}
