//! DTOs for registration, login and profile endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use sh_core::domain::entities::user::User;
use sh_core::domain::value_objects::NewUser;

use super::booking_dto::BookingResponse;
use super::favorite_dto::FavoriteResponse;
use super::property_dto::PropertyResponse;

/// Request body for POST /api/auth/registration/
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Account email, unique across the system
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Display name, unique across the system
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: String,

    /// Plaintext password, hashed before storage
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

impl RegisterRequest {
    /// Convert into the domain value object
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            email: self.email,
            username: self.username,
            password: self.password,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
        }
    }
}

/// Request body for POST /api/auth/login/
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// Public representation of a user account
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

/// Response body for GET /api/auth/user/
///
/// The account enriched with everything the caller owns.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfileResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub properties: Vec<PropertyResponse>,
    pub bookings: Vec<BookingResponse>,
    pub favorites: Vec<FavoriteResponse>,
}
