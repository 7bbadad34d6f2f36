//! Tests for the credential codec and the token lifecycle service.

mod codec_tests;
mod service_tests;

use vouch_shared::config::TokenConfig;

use crate::repositories::MockTokenRepository;
use crate::services::token::{CredentialCodec, CredentialKeys, TokenService};
use crate::test_keys::{TEST_PRIVATE_KEY, TEST_PUBLIC_KEY};

fn codec() -> CredentialCodec {
    let keys = CredentialKeys::from_pem_strings(TEST_PRIVATE_KEY, TEST_PUBLIC_KEY)
        .expect("embedded test keys are valid");
    CredentialCodec::new(keys)
}

fn service() -> TokenService<MockTokenRepository> {
    service_with(MockTokenRepository::new(), TokenConfig::default())
}

fn service_with(
    repository: MockTokenRepository,
    config: TokenConfig,
) -> TokenService<MockTokenRepository> {
    TokenService::new(repository, codec(), config)
}
