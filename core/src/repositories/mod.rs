//! Repository traits defining the persistence interfaces for the domain.
//!
//! Each aggregate gets a trait plus an in-memory mock used by service and
//! API tests. Concrete SQL implementations live in the `sh_infra` crate.

pub mod booking;
pub mod favorite;
pub mod property;
pub mod user;

pub use booking::{BookingRepository, MockBookingRepository};
pub use favorite::{FavoriteRepository, MockFavoriteRepository};
pub use property::{MockPropertyRepository, PropertyRepository};
pub use user::{MockUserRepository, UserRepository};
