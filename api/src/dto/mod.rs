//! Request and response DTOs for the HTTP surface.
//!
//! Requests carry validator annotations; responses are built from domain
//! entities and never expose password hashes.

pub mod auth_dto;
pub mod booking_dto;
pub mod favorite_dto;
pub mod property_dto;

pub use auth_dto::{LoginRequest, RegisterRequest, UserProfileResponse, UserResponse};
pub use booking_dto::{BookingRequest, BookingResponse};
pub use favorite_dto::{FavoriteRequest, FavoriteResponse};
pub use property_dto::{PropertyDetailResponse, PropertyRequest, PropertyResponse};
