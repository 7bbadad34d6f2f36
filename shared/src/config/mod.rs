//! Configuration module
//!
//! - `auth` - token lifetime and verification-code signing configuration

pub mod auth;

pub use auth::{TokenConfig, VerificationConfig};
