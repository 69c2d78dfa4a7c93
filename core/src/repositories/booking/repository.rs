//! Booking repository trait defining the interface for reservation
//! persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::booking::Booking;
use crate::errors::DomainError;

/// Repository trait for Booking entity persistence operations
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new booking
    async fn create(&self, booking: Booking) -> Result<Booking, DomainError>;

    /// Find a booking by id, regardless of renter
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError>;

    /// Ownership-scoped lookup: find a booking by id only if `renter_id`
    /// is the renter
    ///
    /// Returns `Ok(None)` both when the booking does not exist and when it
    /// belongs to someone else; callers must not distinguish the two.
    async fn find_for_renter(
        &self,
        id: Uuid,
        renter_id: Uuid,
    ) -> Result<Option<Booking>, DomainError>;

    /// List every booking where `renter_id` is the renter
    async fn list_by_renter(&self, renter_id: Uuid) -> Result<Vec<Booking>, DomainError>;

    /// List every booking placed on a property
    async fn list_by_property(&self, property_id: Uuid) -> Result<Vec<Booking>, DomainError>;

    /// Replace a stored booking with the given entity (matched by id)
    async fn update(&self, booking: Booking) -> Result<Booking, DomainError>;

    /// Ownership-scoped delete
    ///
    /// # Returns
    /// * `Ok(true)` - Booking was deleted
    /// * `Ok(false)` - Booking absent or rented by someone else
    async fn delete_for_renter(&self, id: Uuid, renter_id: Uuid) -> Result<bool, DomainError>;
}
