//! MySQL implementation of the BookingRepository trait.
//!
//! Renter-scoped operations put the renter check in the WHERE clause so an
//! absent booking and a foreign booking are indistinguishable to the caller.
//! The status column is stored as its canonical lowercase string.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sh_core::domain::entities::booking::{Booking, BookingStatus};
use sh_core::errors::DomainError;
use sh_core::repositories::BookingRepository;

const BOOKING_COLUMNS: &str = r#"id, property_id, user_id, check_in, check_out, total_price,
                   status, guests, special_requests, created_at"#;

/// MySQL implementation of BookingRepository
pub struct MySqlBookingRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlBookingRepository {
    /// Create a new MySQL booking repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Booking entity
    fn row_to_booking(row: &sqlx::mysql::MySqlRow) -> Result<Booking, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;
        let property_id: String = row
            .try_get("property_id")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get property_id: {}", e),
            })?;
        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Database {
            message: format!("Failed to get user_id: {}", e),
        })?;
        let status: String = row.try_get("status").map_err(|e| DomainError::Database {
            message: format!("Failed to get status: {}", e),
        })?;

        Ok(Booking {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid booking UUID: {}", e),
            })?,
            property_id: Uuid::parse_str(&property_id).map_err(|e| DomainError::Database {
                message: format!("Invalid property UUID: {}", e),
            })?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Database {
                message: format!("Invalid user UUID: {}", e),
            })?,
            check_in: row
                .try_get::<DateTime<Utc>, _>("check_in")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get check_in: {}", e),
                })?,
            check_out: row
                .try_get::<DateTime<Utc>, _>("check_out")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get check_out: {}", e),
                })?,
            total_price: row
                .try_get("total_price")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get total_price: {}", e),
                })?,
            status: BookingStatus::from_str(&status).map_err(|e| DomainError::Database {
                message: format!("Invalid booking status: {}", e),
            })?,
            guests: row.try_get("guests").map_err(|e| DomainError::Database {
                message: format!("Failed to get guests: {}", e),
            })?,
            special_requests: row
                .try_get("special_requests")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get special_requests: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl BookingRepository for MySqlBookingRepository {
    async fn create(&self, booking: Booking) -> Result<Booking, DomainError> {
        let query = r#"
            INSERT INTO bookings (
                id, property_id, user_id, check_in, check_out, total_price,
                status, guests, special_requests, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(booking.id.to_string())
            .bind(booking.property_id.to_string())
            .bind(booking.user_id.to_string())
            .bind(booking.check_in)
            .bind(booking.check_out)
            .bind(booking.total_price)
            .bind(booking.status.as_str())
            .bind(booking.guests)
            .bind(&booking.special_requests)
            .bind(booking.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create booking: {}", e),
            })?;

        Ok(booking)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        let query = format!(
            "SELECT {} FROM bookings WHERE id = ? LIMIT 1",
            BOOKING_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find booking by id: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_booking(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_for_renter(
        &self,
        id: Uuid,
        renter_id: Uuid,
    ) -> Result<Option<Booking>, DomainError> {
        let query = format!(
            "SELECT {} FROM bookings WHERE id = ? AND user_id = ? LIMIT 1",
            BOOKING_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .bind(renter_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find booking for renter: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_booking(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_by_renter(&self, renter_id: Uuid) -> Result<Vec<Booking>, DomainError> {
        let query = format!(
            "SELECT {} FROM bookings WHERE user_id = ? ORDER BY created_at DESC",
            BOOKING_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(renter_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to list bookings by renter: {}", e),
            })?;

        let mut bookings = Vec::with_capacity(rows.len());
        for row in rows {
            bookings.push(Self::row_to_booking(&row)?);
        }
        Ok(bookings)
    }

    async fn list_by_property(&self, property_id: Uuid) -> Result<Vec<Booking>, DomainError> {
        let query = format!(
            "SELECT {} FROM bookings WHERE property_id = ? ORDER BY created_at DESC",
            BOOKING_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(property_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to list bookings by property: {}", e),
            })?;

        let mut bookings = Vec::with_capacity(rows.len());
        for row in rows {
            bookings.push(Self::row_to_booking(&row)?);
        }
        Ok(bookings)
    }

    async fn update(&self, booking: Booking) -> Result<Booking, DomainError> {
        let query = r#"
            UPDATE bookings
            SET property_id = ?, check_in = ?, check_out = ?, total_price = ?,
                status = ?, guests = ?, special_requests = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(booking.property_id.to_string())
            .bind(booking.check_in)
            .bind(booking.check_out)
            .bind(booking.total_price)
            .bind(booking.status.as_str())
            .bind(booking.guests)
            .bind(&booking.special_requests)
            .bind(booking.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update booking: {}", e),
            })?;

        Ok(booking)
    }

    async fn delete_for_renter(&self, id: Uuid, renter_id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM bookings WHERE id = ? AND user_id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .bind(renter_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete booking: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
