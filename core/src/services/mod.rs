//! Business services implementing the application's use cases.

pub mod auth;
pub mod booking;
pub mod favorite;
pub mod property;
pub mod token;

// Re-export commonly used types
pub use auth::AuthService;
pub use booking::BookingService;
pub use favorite::FavoriteService;
pub use property::PropertyService;
pub use token::{Claims, TokenService, TokenServiceConfig};
