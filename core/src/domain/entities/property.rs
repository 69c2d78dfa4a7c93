//! Property entity representing a rentable listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::PropertyInput;

/// Property entity representing a rentable listing
///
/// The owner reference is immutable after creation; updates replace the
/// listing fields but never reassign ownership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Unique identifier for the property
    pub id: Uuid,

    /// Listing title
    pub title: String,

    /// Optional long-form description
    pub description: Option<String>,

    /// Price for one night, must be positive
    pub price_per_night: f64,

    /// Optional street address
    pub address: Option<String>,

    /// Optional city
    pub city: Option<String>,

    /// Optional country
    pub country: Option<String>,

    /// Maximum number of guests
    pub capacity: i32,

    /// Number of bedrooms
    pub bedrooms: i32,

    /// Number of bathrooms
    pub bathrooms: i32,

    /// Optional free-text amenity list
    pub amenities: Option<String>,

    /// Whether the property accepts new bookings
    pub is_available: bool,

    /// Owner of the listing, immutable after creation
    pub owner_id: Uuid,

    /// Timestamp when the listing was created
    pub created_at: DateTime<Utc>,
}

impl Property {
    /// Creates a new listing owned by `owner_id`
    pub fn new(owner_id: Uuid, input: PropertyInput) -> Self {
        let mut property = Self {
            id: Uuid::new_v4(),
            title: String::new(),
            description: None,
            price_per_night: 0.0,
            address: None,
            city: None,
            country: None,
            capacity: 1,
            bedrooms: 1,
            bathrooms: 1,
            amenities: None,
            is_available: true,
            owner_id,
            created_at: Utc::now(),
        };
        property.apply(input);
        property
    }

    /// Replaces every listing field from the input (full-replace semantics);
    /// id, owner and creation timestamp are preserved
    pub fn apply(&mut self, input: PropertyInput) {
        self.title = input.title;
        self.description = input.description;
        self.price_per_night = input.price_per_night;
        self.address = input.address;
        self.city = input.city;
        self.country = input.country;
        self.capacity = input.capacity;
        self.bedrooms = input.bedrooms;
        self.bathrooms = input.bathrooms;
        self.amenities = input.amenities;
        self.is_available = input.is_available;
    }
}
