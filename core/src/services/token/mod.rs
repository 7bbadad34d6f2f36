//! Token service module
//!
//! This module handles credential signing and verification (the codec),
//! RS256 key management, and the persisted token lifecycle: issuance,
//! rotation with an audit chain, revocation, and inspection.

mod codec;
mod keys;
mod service;

#[cfg(test)]
mod tests;

pub use codec::CredentialCodec;
pub use keys::CredentialKeys;
pub use service::TokenService;
