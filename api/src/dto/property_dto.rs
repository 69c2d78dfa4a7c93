//! DTOs for property catalog endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use sh_core::domain::entities::property::Property;
use sh_core::domain::value_objects::PropertyInput;

use super::auth_dto::UserResponse;
use super::booking_dto::BookingResponse;

fn default_capacity() -> i32 {
    1
}

fn default_true() -> bool {
    true
}

/// Request body for creating or replacing a listing
///
/// PUT uses the same body as POST: updates are full-replace, there are no
/// partial updates.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PropertyRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    pub description: Option<String>,

    #[validate(range(min = 0.01, message = "Price per night must be positive"))]
    pub price_per_night: f64,

    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,

    #[serde(default = "default_capacity")]
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: i32,

    #[serde(default = "default_capacity")]
    pub bedrooms: i32,

    #[serde(default = "default_capacity")]
    pub bathrooms: i32,

    pub amenities: Option<String>,

    #[serde(default = "default_true")]
    pub is_available: bool,
}

impl PropertyRequest {
    /// Convert into the domain value object
    pub fn into_input(self) -> PropertyInput {
        PropertyInput {
            title: self.title,
            description: self.description,
            price_per_night: self.price_per_night,
            address: self.address,
            city: self.city,
            country: self.country,
            capacity: self.capacity,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            amenities: self.amenities,
            is_available: self.is_available,
        }
    }
}

/// Public representation of a listing
#[derive(Debug, Clone, Serialize)]
pub struct PropertyResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub price_per_night: f64,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub capacity: i32,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub amenities: Option<String>,
    pub is_available: bool,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Property> for PropertyResponse {
    fn from(property: Property) -> Self {
        Self {
            id: property.id,
            title: property.title,
            description: property.description,
            price_per_night: property.price_per_night,
            address: property.address,
            city: property.city,
            country: property.country,
            capacity: property.capacity,
            bedrooms: property.bedrooms,
            bathrooms: property.bathrooms,
            amenities: property.amenities,
            is_available: property.is_available,
            owner_id: property.owner_id,
            created_at: property.created_at,
        }
    }
}

/// Response body for GET /api/properties/{id}/
///
/// The listing enriched with its owner and booking history.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyDetailResponse {
    #[serde(flatten)]
    pub property: PropertyResponse,
    pub owner: Option<UserResponse>,
    pub bookings: Vec<BookingResponse>,
}
