//! User repository interface and the in-memory implementation used in tests.

mod mock;
mod r#trait;

pub use mock::MockUserRepository;
pub use r#trait::UserRepository;
