//! Booking repository interface and test double.

mod mock;
mod repository;

pub use mock::MockBookingRepository;
pub use repository::BookingRepository;
