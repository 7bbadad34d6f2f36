//! RS256 key management for credential signing and verification.

use std::fs;
use std::path::Path;

use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::errors::{DomainError, TokenError};

/// Key material for the credential codec
///
/// The issuing service holds the full pair; downstream consumers are built
/// public-only and can verify but never sign.
#[derive(Clone)]
pub struct CredentialKeys {
    encoding_key: Option<EncodingKey>,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for CredentialKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialKeys")
            .field("can_sign", &self.can_sign())
            .finish()
    }
}

impl CredentialKeys {
    /// Creates a key pair from PEM strings
    pub fn from_pem_strings(
        private_key_pem: &str,
        public_key_pem: &str,
    ) -> Result<Self, DomainError> {
        let encoding_key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes()).map_err(|e| {
            DomainError::Token(TokenError::KeyLoadError {
                message: format!("invalid private key: {}", e),
            })
        })?;

        let decoding_key = Self::decoding_key_from_pem(public_key_pem)?;

        Ok(Self {
            encoding_key: Some(encoding_key),
            decoding_key,
        })
    }

    /// Creates a key pair from PEM files
    pub fn from_pem_files<P: AsRef<Path>>(
        private_key_path: P,
        public_key_path: P,
    ) -> Result<Self, DomainError> {
        let private_key_pem = read_pem(private_key_path.as_ref())?;
        let public_key_pem = read_pem(public_key_path.as_ref())?;
        Self::from_pem_strings(&private_key_pem, &public_key_pem)
    }

    /// Creates verify-only key material from a public key PEM string
    pub fn public_only_from_pem(public_key_pem: &str) -> Result<Self, DomainError> {
        Ok(Self {
            encoding_key: None,
            decoding_key: Self::decoding_key_from_pem(public_key_pem)?,
        })
    }

    /// Creates verify-only key material from a public key PEM file
    pub fn public_only_from_pem_file<P: AsRef<Path>>(
        public_key_path: P,
    ) -> Result<Self, DomainError> {
        let public_key_pem = read_pem(public_key_path.as_ref())?;
        Self::public_only_from_pem(&public_key_pem)
    }

    /// Creates a key pair from the `JWT_PRIVATE_KEY_PATH` /
    /// `JWT_PUBLIC_KEY_PATH` environment variables
    pub fn from_env() -> Result<Self, DomainError> {
        let private_key_path = std::env::var("JWT_PRIVATE_KEY_PATH").map_err(|_| {
            DomainError::Token(TokenError::KeyLoadError {
                message: "JWT_PRIVATE_KEY_PATH not set".to_string(),
            })
        })?;
        let public_key_path = std::env::var("JWT_PUBLIC_KEY_PATH").map_err(|_| {
            DomainError::Token(TokenError::KeyLoadError {
                message: "JWT_PUBLIC_KEY_PATH not set".to_string(),
            })
        })?;

        Self::from_pem_files(&private_key_path, &public_key_path)
    }

    /// Whether this key material can sign credentials
    pub fn can_sign(&self) -> bool {
        self.encoding_key.is_some()
    }

    /// Returns the encoding key, if the private key was loaded
    pub(crate) fn encoding_key(&self) -> Option<&EncodingKey> {
        self.encoding_key.as_ref()
    }

    /// Returns the decoding key
    pub(crate) fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }

    fn decoding_key_from_pem(public_key_pem: &str) -> Result<DecodingKey, DomainError> {
        DecodingKey::from_rsa_pem(public_key_pem.as_bytes()).map_err(|e| {
            DomainError::Token(TokenError::KeyLoadError {
                message: format!("invalid public key: {}", e),
            })
        })
    }
}

fn read_pem(path: &Path) -> Result<String, DomainError> {
    fs::read_to_string(path).map_err(|e| {
        DomainError::Token(TokenError::KeyLoadError {
            message: format!("failed to read {}: {}", path.display(), e),
        })
    })
}
