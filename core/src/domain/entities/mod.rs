//! Domain entities for the token lifecycle engine.

pub mod token;
pub mod user;

pub use token::{AccessClaims, Token};
pub use user::{User, UserStatus};
