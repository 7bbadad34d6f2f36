//! Credential codec: RS256 signing and verification of the claim set.

use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, Header, Validation};

use crate::domain::entities::token::{AccessClaims, Token};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

use super::keys::CredentialKeys;

/// Stateless signer/verifier for access credentials
///
/// Verification checks structure, signature, and algorithm only. The expiry
/// lives in the unregistered `expires` claim and is deliberately NOT checked
/// here: the authoritative and stateless verifiers apply their own freshness
/// policies.
#[derive(Clone)]
pub struct CredentialCodec {
    keys: CredentialKeys,
    header: Header,
    validation: Validation,
}

impl CredentialCodec {
    /// Creates a codec over the given key material
    pub fn new(keys: CredentialKeys) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self {
            keys,
            header: Header::new(Algorithm::RS256),
            validation,
        }
    }

    /// Whether this codec holds a private key and can sign
    pub fn can_sign(&self) -> bool {
        self.keys.can_sign()
    }

    /// Signs the credential for a token record, snapshotting the owner
    pub fn sign(&self, token: &Token, user: &User) -> Result<String, DomainError> {
        self.sign_claims(&token.claims(user))
    }

    /// Signs an explicit claim set
    pub fn sign_claims(&self, claims: &AccessClaims) -> Result<String, DomainError> {
        let encoding_key = self
            .keys
            .encoding_key()
            .ok_or(DomainError::Token(TokenError::SigningKeyUnavailable))?;

        encode(&self.header, claims, encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a credential string and returns its claims
    ///
    /// Fails on malformed structure, signature mismatch, or an unsupported
    /// algorithm; never panics into the caller.
    pub fn verify(&self, credential: &str) -> Result<AccessClaims, DomainError> {
        let data = decode::<AccessClaims>(credential, self.keys.decoding_key(), &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => DomainError::Token(TokenError::InvalidSignature),
                ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                    DomainError::Token(TokenError::UnsupportedAlgorithm)
                }
                ErrorKind::Json(_) => DomainError::Token(TokenError::InvalidClaims),
                _ => DomainError::Token(TokenError::InvalidTokenFormat),
            })?;

        Ok(data.claims)
    }
}
