//! Verification-code signing for out-of-band flows
//!
//! Codes are transient signed capsules binding a user id to a purpose
//! namespace and an issuance timestamp; nothing is persisted.

mod signer;

pub use signer::{VerificationSigner, PURPOSE_RESET_PASSWORD, PURPOSE_VERIFY_EMAIL};
