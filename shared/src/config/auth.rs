//! Token and verification-code configuration

use serde::{Deserialize, Serialize};

/// Default access-token lifetime in seconds (1 hour)
const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;

/// Default verification-code max age in seconds (24 hours)
const DEFAULT_VERIFICATION_MAX_AGE_SECS: i64 = 86_400;

/// Length of the opaque rotation secret attached to every token record
const DEFAULT_REFRESH_SECRET_LENGTH: usize = 64;

/// Token lifecycle configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Access-token lifetime in seconds; a token record expires at
    /// `issued + lifetime_secs`
    pub lifetime_secs: i64,

    /// Length of the generated rotation secret
    #[serde(default = "default_refresh_secret_length")]
    pub refresh_secret_length: usize,
}

fn default_refresh_secret_length() -> usize {
    DEFAULT_REFRESH_SECRET_LENGTH
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            lifetime_secs: DEFAULT_TOKEN_LIFETIME_SECS,
            refresh_secret_length: DEFAULT_REFRESH_SECRET_LENGTH,
        }
    }
}

impl TokenConfig {
    /// Create configuration with an explicit lifetime
    pub fn with_lifetime_secs(lifetime_secs: i64) -> Self {
        Self {
            lifetime_secs,
            ..Default::default()
        }
    }

    /// Load configuration from environment variables
    ///
    /// Reads `AUTH_TOKEN_EXPIRE_TIME` (seconds); falls back to the default
    /// lifetime when unset or unparsable.
    pub fn from_env() -> Self {
        let lifetime_secs = std::env::var("AUTH_TOKEN_EXPIRE_TIME")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS);

        Self {
            lifetime_secs,
            refresh_secret_length: DEFAULT_REFRESH_SECRET_LENGTH,
        }
    }
}

/// Verification-code signer configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Shared symmetric signing secret
    pub secret: String,

    /// Default max age in seconds accepted when decoding a code
    #[serde(default = "default_verification_max_age")]
    pub default_max_age_secs: i64,
}

fn default_verification_max_age() -> i64 {
    DEFAULT_VERIFICATION_MAX_AGE_SECS
}

impl VerificationConfig {
    /// Create configuration with an explicit secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            default_max_age_secs: DEFAULT_VERIFICATION_MAX_AGE_SECS,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Reads `SECRET_KEY` for the signing secret and optionally
    /// `VERIFICATION_MAX_AGE` (seconds).
    pub fn from_env() -> Option<Self> {
        let secret = std::env::var("SECRET_KEY").ok()?;
        let default_max_age_secs = std::env::var("VERIFICATION_MAX_AGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_VERIFICATION_MAX_AGE_SECS);

        Some(Self {
            secret,
            default_max_age_secs,
        })
    }
}
