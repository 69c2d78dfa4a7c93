//! In-memory implementation of BookingRepository for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::booking::Booking;
use crate::errors::DomainError;

use super::repository::BookingRepository;

/// Mock booking repository backed by a HashMap
#[derive(Default)]
pub struct MockBookingRepository {
    bookings: Arc<RwLock<HashMap<Uuid, Booking>>>,
}

impl MockBookingRepository {
    /// Create a new, empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored bookings; used to assert nothing was persisted
    pub async fn count(&self) -> usize {
        self.bookings.read().await.len()
    }
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn create(&self, booking: Booking) -> Result<Booking, DomainError> {
        let mut bookings = self.bookings.write().await;
        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.get(&id).cloned())
    }

    async fn find_for_renter(
        &self,
        id: Uuid,
        renter_id: Uuid,
    ) -> Result<Option<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .get(&id)
            .filter(|b| b.user_id == renter_id)
            .cloned())
    }

    async fn list_by_renter(&self, renter_id: Uuid) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .values()
            .filter(|b| b.user_id == renter_id)
            .cloned()
            .collect())
    }

    async fn list_by_property(&self, property_id: Uuid) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .values()
            .filter(|b| b.property_id == property_id)
            .cloned()
            .collect())
    }

    async fn update(&self, booking: Booking) -> Result<Booking, DomainError> {
        let mut bookings = self.bookings.write().await;

        if !bookings.contains_key(&booking.id) {
            return Err(DomainError::not_found("Booking"));
        }

        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn delete_for_renter(&self, id: Uuid, renter_id: Uuid) -> Result<bool, DomainError> {
        let mut bookings = self.bookings.write().await;
        match bookings.get(&id) {
            Some(b) if b.user_id == renter_id => {
                bookings.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
