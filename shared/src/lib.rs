//! Shared configuration types for the Vouch auth service
//!
//! This crate holds the configuration surface consumed by the core crate:
//! token lifetime settings and the verification-code signing secret.
//! Key material and secrets are always injected explicitly; nothing in
//! here reads ambient global state at use time.

pub mod config;

// Re-export commonly used items at crate root
pub use config::{TokenConfig, VerificationConfig};
