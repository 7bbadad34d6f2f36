//! Business services: credential codec, verification-code signer,
//! token lifecycle, and the two credential verifiers.

pub mod token;
pub mod verification;
pub mod verifier;

// Re-export commonly used types
pub use token::{CredentialCodec, CredentialKeys, TokenService};
pub use verification::{VerificationSigner, PURPOSE_RESET_PASSWORD, PURPOSE_VERIFY_EMAIL};
pub use verifier::{
    Authenticator, AuthoritativeVerifier, StatelessVerifier, TokenPrincipal, AUTH_SCHEME,
};
