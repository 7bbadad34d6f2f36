//! HMAC-SHA256 signer for purpose-scoped verification codes.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

use vouch_shared::config::VerificationConfig;

type HmacSha256 = Hmac<Sha256>;

/// Purpose namespace for email-confirmation codes
pub const PURPOSE_VERIFY_EMAIL: &str = "verify-email";

/// Purpose namespace for password-reset codes
pub const PURPOSE_RESET_PASSWORD: &str = "reset-password";

/// Stateless signer for short-lived verification codes
///
/// The signing key is derived per purpose, so a code minted for one purpose
/// can never satisfy another even though both carry the same subject. Codes
/// are not stored anywhere; a code replayed within its max-age window is
/// accepted, which is the accepted trade-off of the stateless design.
#[derive(Clone)]
pub struct VerificationSigner {
    secret: Vec<u8>,
}

impl VerificationSigner {
    /// Creates a signer from configuration
    pub fn new(config: &VerificationConfig) -> Self {
        Self::from_secret(&config.secret)
    }

    /// Creates a signer from a raw shared secret
    pub fn from_secret(secret: &str) -> Self {
        Self {
            secret: secret.as_bytes().to_vec(),
        }
    }

    /// Signs a subject id under a purpose namespace
    ///
    /// Wire format: `b64url(subject) . b64url(issued) . b64url(mac)`.
    pub fn encode(&self, subject: Uuid, purpose: &str) -> String {
        self.encode_at(subject, purpose, Utc::now())
    }

    /// Decodes a code, enforcing the purpose namespace and a max age
    ///
    /// Returns `None` on tampering, purpose mismatch, malformed input, or
    /// when more than `max_age_secs` have elapsed since issuance; never a
    /// partial value.
    pub fn decode(&self, code: &str, purpose: &str, max_age_secs: i64) -> Option<Uuid> {
        let (payload, sig_part) = code.rsplit_once('.')?;
        let (subject_part, ts_part) = payload.split_once('.')?;

        let sig = URL_SAFE_NO_PAD.decode(sig_part).ok()?;
        let mut mac = self.mac_for_purpose(purpose);
        mac.update(payload.as_bytes());
        // Constant-time comparison; a forged or cross-purpose code dies here
        mac.verify_slice(&sig).ok()?;

        let ts_bytes = URL_SAFE_NO_PAD.decode(ts_part).ok()?;
        let issued: i64 = std::str::from_utf8(&ts_bytes).ok()?.parse().ok()?;
        if Utc::now().timestamp() - issued > max_age_secs {
            return None;
        }

        let subject_bytes = URL_SAFE_NO_PAD.decode(subject_part).ok()?;
        Uuid::parse_str(std::str::from_utf8(&subject_bytes).ok()?).ok()
    }

    fn encode_at(&self, subject: Uuid, purpose: &str, issued: DateTime<Utc>) -> String {
        let subject_part = URL_SAFE_NO_PAD.encode(subject.to_string());
        let ts_part = URL_SAFE_NO_PAD.encode(issued.timestamp().to_string());
        let payload = format!("{}.{}", subject_part, ts_part);

        let mut mac = self.mac_for_purpose(purpose);
        mac.update(payload.as_bytes());
        let sig_part = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        format!("{}.{}", payload, sig_part)
    }

    /// Derives the per-purpose MAC so the namespace is mixed into the
    /// signature itself, not merely checked after decoding
    fn mac_for_purpose(&self, purpose: &str) -> HmacSha256 {
        // HMAC-SHA256 accepts keys of any length, so construction cannot fail
        let mut derive =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC accepts any key length");
        derive.update(purpose.as_bytes());
        let key = derive.finalize().into_bytes();

        HmacSha256::new_from_slice(&key).expect("HMAC accepts any key length")
    }
}
