//! Lifecycle service tests: issuance, revocation, login, inspection.

use std::net::{IpAddr, Ipv4Addr};

use uuid::Uuid;

use vouch_shared::config::TokenConfig;

use crate::domain::entities::token::Token;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::repositories::MockTokenRepository;

use super::{service, service_with};

fn client_ip() -> Option<IpAddr> {
    Some(IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7)))
}

#[tokio::test]
async fn test_issue_populates_record() {
    let service = service();
    let user_id = Uuid::new_v4();

    let token = service.issue(user_id, client_ip(), None).await.unwrap();

    assert_eq!(token.user_id, user_id);
    assert_eq!(token.ip, client_ip());
    assert!(token.source.is_none());
    assert!(token.revoked.is_none());
    assert!(token.renewed.is_none());
    assert_eq!(token.refresh.len(), 64);
    assert_eq!((token.expires - token.issued).num_seconds(), 3600);
    assert!(token.is_valid());
}

#[tokio::test]
async fn test_issue_generates_unique_secrets() {
    let service = service();
    let user_id = Uuid::new_v4();

    let first = service.issue(user_id, None, None).await.unwrap();
    let second = service.issue(user_id, None, None).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_ne!(first.refresh, second.refresh);
}

#[tokio::test]
async fn test_issue_honors_configured_lifetime() {
    let service = service_with(
        MockTokenRepository::new(),
        TokenConfig::with_lifetime_secs(120),
    );

    let token = service.issue(Uuid::new_v4(), None, None).await.unwrap();

    assert_eq!((token.expires - token.issued).num_seconds(), 120);
}

#[tokio::test]
async fn test_secret_collisions_are_retried_until_space_exhausts() {
    let repository = MockTokenRepository::new();
    // One-character secrets: 62 possible values, so collisions are certain
    let service = service_with(
        repository.clone(),
        TokenConfig {
            lifetime_secs: 3600,
            refresh_secret_length: 1,
        },
    );
    let user_id = Uuid::new_v4();

    let mut successes = 0;
    let mut exhausted = 0;
    for _ in 0..200 {
        match service.issue(user_id, None, None).await {
            Ok(_) => successes += 1,
            Err(DomainError::Internal { .. }) => exhausted += 1,
            Err(other) => panic!("unexpected issue error: {:?}", other),
        }
    }

    // Every secret value gets consumed exactly once; the collisions hit
    // along the way were retried silently rather than surfaced
    assert_eq!(successes, 62);
    assert_eq!(repository.len().await, 62);
    assert!(exhausted > 0);
}

#[tokio::test]
async fn test_login_returns_complete_credential_set() {
    let service = service();
    let mut user = User::new("alice@example.com".to_string());
    user.profile = serde_json::json!({"name": "Alice"});

    let response = service.login(&user, client_ip()).await.unwrap();

    assert_eq!(response.user, user.id);

    let claims = service.codec().verify(&response.token).unwrap();
    assert_eq!(claims.user, user.id);
    assert_eq!(claims.profile, user.profile);

    let record = service.lookup(claims.token).await.unwrap().unwrap();
    assert_eq!(record.refresh, response.refresh);
    assert_eq!(record.expires.timestamp(), response.expires);
    assert_eq!(record.ip, client_ip());
}

#[tokio::test]
async fn test_revoke_is_idempotent() {
    let service = service();
    let token = service.issue(Uuid::new_v4(), None, None).await.unwrap();

    assert!(service.revoke(&token.refresh).await.unwrap());
    let revoked_at = service.lookup(token.id).await.unwrap().unwrap().revoked;
    assert!(revoked_at.is_some());

    // A second revocation reports success without moving the timestamp
    assert!(service.revoke(&token.refresh).await.unwrap());
    let record = service.lookup(token.id).await.unwrap().unwrap();
    assert_eq!(record.revoked, revoked_at);
    assert!(!record.is_valid());
}

#[tokio::test]
async fn test_revoke_unknown_secret_reports_not_found() {
    let service = service();

    assert!(!service.revoke("no-such-secret").await.unwrap());
}

#[tokio::test]
async fn test_revoked_secret_cannot_rotate() {
    let service = service();
    let token = service.issue(Uuid::new_v4(), None, None).await.unwrap();

    assert!(service.revoke(&token.refresh).await.unwrap());

    assert_eq!(
        service.rotate(&token.refresh, None).await.unwrap_err(),
        DomainError::Token(TokenError::InvalidRefreshToken)
    );
}

#[tokio::test]
async fn test_inspect_reports_record_validity() {
    let service = service();
    let user = User::new("bob@example.com".to_string());

    let response = service.login(&user, None).await.unwrap();

    let inspection = service.inspect(&response.token).await.unwrap().unwrap();
    assert!(inspection.valid);
    assert_eq!(inspection.claims.user, user.id);

    // Revocation flips validity but the claims still decode
    assert!(service.revoke(&response.refresh).await.unwrap());
    let inspection = service.inspect(&response.token).await.unwrap().unwrap();
    assert!(!inspection.valid);
    assert_eq!(inspection.claims.user, user.id);
}

#[tokio::test]
async fn test_inspect_unknown_record_or_garbage_yields_none() {
    let service = service();

    assert_eq!(service.inspect("garbage").await.unwrap(), None);

    // Well-signed credential whose record was never stored
    let user = User::new("carol@example.com".to_string());
    let orphan = Token::new(user.id, None, "r".repeat(64), 3600, None);
    let credential = service.codec().sign(&orphan, &user).unwrap();

    assert_eq!(service.inspect(&credential).await.unwrap(), None);
}
