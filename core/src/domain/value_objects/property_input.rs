//! Listing fields accepted when creating or replacing a property.

use serde::{Deserialize, Serialize};

/// Full set of listing fields for a property
///
/// Used for both creation and update; updates are full-replace, so every
/// field is present (optionals model genuinely optional listing data).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyInput {
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
}
