//! Domain entities representing core business objects.

pub mod booking;
pub mod favorite;
pub mod property;
pub mod user;

// Re-export commonly used types
pub use booking::{Booking, BookingStatus};
pub use favorite::Favorite;
pub use property::Property;
pub use user::User;
