//! DTOs for booking endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use sh_core::domain::entities::booking::{Booking, BookingStatus};
use sh_core::domain::value_objects::BookingInput;

fn default_guests() -> i32 {
    1
}

/// Request body for creating or replacing a booking
///
/// The total price is never taken from the client; it is recomputed from
/// the property's current price on every create and update.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookingRequest {
    pub property_id: Uuid,

    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,

    #[serde(default = "default_guests")]
    #[validate(range(min = 1, message = "Guests must be at least 1"))]
    pub guests: i32,

    pub special_requests: Option<String>,
}

impl BookingRequest {
    /// Convert into the domain value object
    pub fn into_input(self) -> BookingInput {
        BookingInput {
            property_id: self.property_id,
            check_in: self.check_in,
            check_out: self.check_out,
            guests: self.guests,
            special_requests: self.special_requests,
        }
    }
}

/// Public representation of a booking
#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub property_id: Uuid,
    pub user_id: Uuid,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub total_price: f64,
    pub status: BookingStatus,
    pub guests: i32,
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            property_id: booking.property_id,
            user_id: booking.user_id,
            check_in: booking.check_in,
            check_out: booking.check_out,
            total_price: booking.total_price,
            status: booking.status,
            guests: booking.guests,
            special_requests: booking.special_requests,
            created_at: booking.created_at,
        }
    }
}
