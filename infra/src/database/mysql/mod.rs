//! MySQL repository implementations.

pub mod booking_repository_impl;
pub mod favorite_repository_impl;
pub mod property_repository_impl;
pub mod user_repository_impl;

pub use booking_repository_impl::MySqlBookingRepository;
pub use favorite_repository_impl::MySqlFavoriteRepository;
pub use property_repository_impl::MySqlPropertyRepository;
pub use user_repository_impl::MySqlUserRepository;
