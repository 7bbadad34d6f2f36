//! Value objects returned by the token lifecycle service.

pub mod auth_response;

pub use auth_response::{AuthResponse, Inspection};
