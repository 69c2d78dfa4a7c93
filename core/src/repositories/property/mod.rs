//! Property repository interface and test double.

mod mock;
mod repository;

pub use mock::MockPropertyRepository;
pub use repository::PropertyRepository;
