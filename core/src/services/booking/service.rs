//! Main booking engine implementation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::booking::Booking;
use crate::domain::value_objects::BookingInput;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{BookingRepository, PropertyRepository};

/// Computes (nights, total price) for a stay
///
/// Nights is the whole-day span between check-in and check-out, floored to
/// a minimum of 1, so a same-day stay is billed as one night.
pub fn quote_stay(
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
    price_per_night: f64,
) -> (i64, f64) {
    let mut nights = (check_out - check_in).num_days();
    if nights <= 0 {
        nights = 1;
    }
    (nights, nights as f64 * price_per_night)
}

/// Booking engine enforcing availability and renter-ownership rules
///
/// Availability is a single boolean on the property, not a capacity or
/// date-range reservation: two concurrent create calls can both pass the
/// check and both persist. The store's transaction isolation is the only
/// guard; this is a known gap.
pub struct BookingService<B, P>
where
    B: BookingRepository,
    P: PropertyRepository,
{
    /// Booking repository for reservation persistence
    bookings: Arc<B>,
    /// Property repository for price and availability lookups
    properties: Arc<P>,
}

impl<B, P> BookingService<B, P>
where
    B: BookingRepository,
    P: PropertyRepository,
{
    /// Create a new booking service
    pub fn new(bookings: Arc<B>, properties: Arc<P>) -> Self {
        Self {
            bookings,
            properties,
        }
    }

    /// Create a pending booking for `renter_id`
    ///
    /// # Errors
    /// * `NotFound` - the property does not exist
    /// * `Conflict` - the property's availability flag is off
    pub async fn create_booking(
        &self,
        renter_id: Uuid,
        input: BookingInput,
    ) -> DomainResult<Booking> {
        let property = self
            .properties
            .find_by_id(input.property_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Property"))?;

        if !property.is_available {
            return Err(DomainError::conflict("Property is not available"));
        }

        let (nights, total_price) =
            quote_stay(input.check_in, input.check_out, property.price_per_night);

        let booking = Booking::new(
            input.property_id,
            renter_id,
            input.check_in,
            input.check_out,
            total_price,
            input.guests,
            input.special_requests,
        );

        let booking = self.bookings.create(booking).await?;
        tracing::info!(
            booking_id = %booking.id,
            property_id = %booking.property_id,
            nights,
            total_price,
            "created booking"
        );
        Ok(booking)
    }

    /// Replace a booking owned by `renter_id` (full-replace semantics)
    ///
    /// The lookup is ownership-scoped: a booking rented by someone else
    /// behaves exactly like a missing one. The total price is recomputed
    /// from the booking's original property at its current nightly price,
    /// even when the payload moves the booking to another listing.
    pub async fn update_booking(
        &self,
        booking_id: Uuid,
        renter_id: Uuid,
        input: BookingInput,
    ) -> DomainResult<Booking> {
        let mut booking = self
            .bookings
            .find_for_renter(booking_id, renter_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking"))?;

        let property = self
            .properties
            .find_by_id(booking.property_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Property"))?;

        let (_, total_price) =
            quote_stay(input.check_in, input.check_out, property.price_per_night);

        booking.property_id = input.property_id;
        booking.check_in = input.check_in;
        booking.check_out = input.check_out;
        booking.guests = input.guests;
        booking.special_requests = input.special_requests;
        booking.total_price = total_price;

        self.bookings.update(booking).await
    }

    /// Delete a booking owned by `renter_id`
    ///
    /// Absent and foreign bookings are indistinguishable: both fail with
    /// `NotFound`.
    pub async fn delete_booking(&self, booking_id: Uuid, renter_id: Uuid) -> DomainResult<()> {
        if !self.bookings.delete_for_renter(booking_id, renter_id).await? {
            return Err(DomainError::not_found("Booking"));
        }
        Ok(())
    }

    /// Fetch a single booking
    ///
    /// The one read that distinguishes foreign from missing: a booking
    /// rented by someone else fails with `Forbidden`, not `NotFound`.
    pub async fn get_booking(&self, booking_id: Uuid, caller_id: Uuid) -> DomainResult<Booking> {
        let booking = self
            .bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking"))?;

        if booking.user_id != caller_id {
            return Err(DomainError::Forbidden);
        }

        Ok(booking)
    }

    /// List every booking where the user is the renter
    pub async fn list_bookings(&self, renter_id: Uuid) -> DomainResult<Vec<Booking>> {
        self.bookings.list_by_renter(renter_id).await
    }

    /// List every booking placed on a property
    pub async fn list_for_property(&self, property_id: Uuid) -> DomainResult<Vec<Booking>> {
        self.bookings.list_by_property(property_id).await
    }
}
