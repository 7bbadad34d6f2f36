//! Credential codec tests: signing, verification, and key separation.

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use uuid::Uuid;

use crate::domain::entities::token::{AccessClaims, Token};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{CredentialCodec, CredentialKeys};
use crate::test_keys::{OTHER_PRIVATE_KEY, OTHER_PUBLIC_KEY, TEST_PUBLIC_KEY};

use super::codec;

fn sample_claims() -> AccessClaims {
    AccessClaims {
        token: Uuid::new_v4(),
        user: Uuid::new_v4(),
        expires: Utc::now().timestamp() + 3600,
        profile: serde_json::json!({"name": "Alice"}),
        staff: false,
    }
}

#[test]
fn test_sign_verify_round_trip() {
    let codec = codec();

    let mut user = User::new("alice@example.com".to_string());
    user.is_staff = true;
    user.profile = serde_json::json!({"name": "Alice"});
    let token = Token::new(user.id, None, "r".repeat(64), 3600, None);

    let credential = codec.sign(&token, &user).unwrap();
    let claims = codec.verify(&credential).unwrap();

    assert_eq!(claims.token, token.id);
    assert_eq!(claims.user, user.id);
    assert_eq!(claims.expires, token.expires.timestamp());
    assert_eq!(claims.profile, user.profile);
    assert!(claims.staff);
}

#[test]
fn test_verify_does_not_check_expiry() {
    let codec = codec();

    let mut claims = sample_claims();
    claims.expires = Utc::now().timestamp() - 100;

    let credential = codec.sign_claims(&claims).unwrap();
    let decoded = codec.verify(&credential).unwrap();

    assert_eq!(decoded, claims);
    assert!(decoded.is_expired());
}

#[test]
fn test_wrong_key_is_rejected() {
    let other_keys = CredentialKeys::from_pem_strings(OTHER_PRIVATE_KEY, OTHER_PUBLIC_KEY)
        .expect("embedded test keys are valid");
    let other = CredentialCodec::new(other_keys);

    // Signed under one key pair, verified under another, in both directions
    let credential = codec().sign_claims(&sample_claims()).unwrap();
    assert_eq!(
        other.verify(&credential),
        Err(DomainError::Token(TokenError::InvalidSignature))
    );

    let foreign = other.sign_claims(&sample_claims()).unwrap();
    assert_eq!(
        codec().verify(&foreign),
        Err(DomainError::Token(TokenError::InvalidSignature))
    );
}

#[test]
fn test_tampered_credential_is_rejected() {
    let codec = codec();
    let credential = codec.sign_claims(&sample_claims()).unwrap();

    // Flip one character in the payload section
    let payload_middle = credential.len() / 2;
    let mut bytes = credential.into_bytes();
    bytes[payload_middle] = if bytes[payload_middle] == b'A' { b'B' } else { b'A' };
    let tampered = String::from_utf8(bytes).unwrap();

    assert!(codec.verify(&tampered).is_err());
}

#[test]
fn test_symmetric_algorithm_is_rejected() {
    let credential = encode(
        &Header::new(Algorithm::HS256),
        &sample_claims(),
        &EncodingKey::from_secret(b"hmac-secret"),
    )
    .unwrap();

    assert_eq!(
        codec().verify(&credential),
        Err(DomainError::Token(TokenError::UnsupportedAlgorithm))
    );
}

#[test]
fn test_public_only_codec_verifies_but_cannot_sign() {
    let keys = CredentialKeys::public_only_from_pem(TEST_PUBLIC_KEY)
        .expect("embedded test keys are valid");
    let public_only = CredentialCodec::new(keys);

    assert!(!public_only.can_sign());
    assert_eq!(
        public_only.sign_claims(&sample_claims()),
        Err(DomainError::Token(TokenError::SigningKeyUnavailable))
    );

    let credential = codec().sign_claims(&sample_claims()).unwrap();
    assert!(public_only.verify(&credential).is_ok());
}

#[test]
fn test_garbage_credential_is_rejected() {
    assert_eq!(
        codec().verify("not-a-credential"),
        Err(DomainError::Token(TokenError::InvalidTokenFormat))
    );
}
