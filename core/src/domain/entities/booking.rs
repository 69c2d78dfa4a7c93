//! Booking entity representing a reservation of a property.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Created but not yet confirmed by the owner
    Pending,
    /// Confirmed by the owner
    Confirmed,
    /// Cancelled by either party
    Cancelled,
    /// The stay has taken place
    Completed,
}

impl BookingStatus {
    /// Canonical lowercase string used for persistence
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            "completed" => Ok(BookingStatus::Completed),
            other => Err(format!("unknown booking status: {}", other)),
        }
    }
}

/// Booking entity representing a reservation
///
/// The total price is always `nights * price_per_night` at the time the
/// booking was created or last updated; a later price change on the
/// property does not retroactively reprice the booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier for the booking
    pub id: Uuid,

    /// The booked property
    pub property_id: Uuid,

    /// The renter
    pub user_id: Uuid,

    /// Start of the stay
    pub check_in: DateTime<Utc>,

    /// End of the stay
    pub check_out: DateTime<Utc>,

    /// Computed total price for the stay
    pub total_price: f64,

    /// Lifecycle status
    pub status: BookingStatus,

    /// Number of guests
    pub guests: i32,

    /// Optional free-text request to the owner
    pub special_requests: Option<String>,

    /// Timestamp when the booking was created
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a new pending booking
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        property_id: Uuid,
        user_id: Uuid,
        check_in: DateTime<Utc>,
        check_out: DateTime<Utc>,
        total_price: f64,
        guests: i32,
        special_requests: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            property_id,
            user_id,
            check_in,
            check_out,
            total_price,
            status: BookingStatus::Pending,
            guests,
            special_requests,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_booking_is_pending() {
        let check_in = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let check_out = Utc.with_ymd_and_hms(2024, 1, 4, 12, 0, 0).unwrap();
        let booking = Booking::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            check_in,
            check_out,
            300.0,
            2,
            None,
        );

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.total_price, 300.0);
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
            BookingStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<BookingStatus>().unwrap(), status);
        }
        assert!("unknown".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&BookingStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
    }
}
