//! User repository interface and test double.

mod mock;
mod repository;

pub use mock::MockUserRepository;
pub use repository::UserRepository;
