//! Token repository interface and the in-memory implementation used in tests.

mod mock;
mod r#trait;


pub use mock::MockTokenRepository;
pub use r#trait::TokenRepository;
