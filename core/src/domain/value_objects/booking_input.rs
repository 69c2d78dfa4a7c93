//! Reservation fields accepted when creating or replacing a booking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Full set of reservation fields for a booking
///
/// Used for both creation and update (full-replace). The total price and
/// status are never part of the input; the booking engine computes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingInput {
    pub property_id: Uuid,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub guests: i32,
    pub special_requests: Option<String>,
}
