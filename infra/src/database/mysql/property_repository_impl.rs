//! MySQL implementation of the PropertyRepository trait.
//!
//! Ownership-scoped operations put the owner check in the WHERE clause so
//! an absent listing and a foreign listing are indistinguishable to the
//! caller.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sh_core::domain::entities::property::Property;
use sh_core::errors::DomainError;
use sh_core::repositories::PropertyRepository;
use sh_shared::types::Pagination;

const PROPERTY_COLUMNS: &str = r#"id, title, description, price_per_night, address, city,
                   country, capacity, bedrooms, bathrooms, amenities,
                   is_available, owner_id, created_at"#;

/// MySQL implementation of PropertyRepository
pub struct MySqlPropertyRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlPropertyRepository {
    /// Create a new MySQL property repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Property entity
    fn row_to_property(row: &sqlx::mysql::MySqlRow) -> Result<Property, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;
        let owner_id: String = row.try_get("owner_id").map_err(|e| DomainError::Database {
            message: format!("Failed to get owner_id: {}", e),
        })?;

        Ok(Property {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid property UUID: {}", e),
            })?,
            title: row.try_get("title").map_err(|e| DomainError::Database {
                message: format!("Failed to get title: {}", e),
            })?,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get description: {}", e),
                })?,
            price_per_night: row
                .try_get("price_per_night")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get price_per_night: {}", e),
                })?,
            address: row.try_get("address").map_err(|e| DomainError::Database {
                message: format!("Failed to get address: {}", e),
            })?,
            city: row.try_get("city").map_err(|e| DomainError::Database {
                message: format!("Failed to get city: {}", e),
            })?,
            country: row.try_get("country").map_err(|e| DomainError::Database {
                message: format!("Failed to get country: {}", e),
            })?,
            capacity: row.try_get("capacity").map_err(|e| DomainError::Database {
                message: format!("Failed to get capacity: {}", e),
            })?,
            bedrooms: row.try_get("bedrooms").map_err(|e| DomainError::Database {
                message: format!("Failed to get bedrooms: {}", e),
            })?,
            bathrooms: row
                .try_get("bathrooms")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get bathrooms: {}", e),
                })?,
            amenities: row
                .try_get("amenities")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get amenities: {}", e),
                })?,
            is_available: row
                .try_get("is_available")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get is_available: {}", e),
                })?,
            owner_id: Uuid::parse_str(&owner_id).map_err(|e| DomainError::Database {
                message: format!("Invalid owner UUID: {}", e),
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
impl PropertyRepository for MySqlPropertyRepository {
    async fn create(&self, property: Property) -> Result<Property, DomainError> {
        let query = r#"
            INSERT INTO properties (
                id, title, description, price_per_night, address, city,
                country, capacity, bedrooms, bathrooms, amenities,
                is_available, owner_id, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(property.id.to_string())
            .bind(&property.title)
            .bind(&property.description)
            .bind(property.price_per_night)
            .bind(&property.address)
            .bind(&property.city)
            .bind(&property.country)
            .bind(property.capacity)
            .bind(property.bedrooms)
            .bind(property.bathrooms)
            .bind(&property.amenities)
            .bind(property.is_available)
            .bind(property.owner_id.to_string())
            .bind(property.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create property: {}", e),
            })?;

        Ok(property)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, DomainError> {
        let query = format!(
            "SELECT {} FROM properties WHERE id = ? LIMIT 1",
            PROPERTY_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find property by id: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_property(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_for_owner(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<Option<Property>, DomainError> {
        let query = format!(
            "SELECT {} FROM properties WHERE id = ? AND owner_id = ? LIMIT 1",
            PROPERTY_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find property for owner: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_property(&row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self, pagination: Pagination) -> Result<Vec<Property>, DomainError> {
        let query = format!(
            "SELECT {} FROM properties ORDER BY created_at DESC LIMIT ? OFFSET ?",
            PROPERTY_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(pagination.limit_i64())
            .bind(pagination.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to list properties: {}", e),
            })?;

        let mut properties = Vec::with_capacity(rows.len());
        for row in rows {
            properties.push(Self::row_to_property(&row)?);
        }
        Ok(properties)
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Property>, DomainError> {
        let query = format!(
            "SELECT {} FROM properties WHERE owner_id = ? ORDER BY created_at DESC",
            PROPERTY_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(owner_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to list properties by owner: {}", e),
            })?;

        let mut properties = Vec::with_capacity(rows.len());
        for row in rows {
            properties.push(Self::row_to_property(&row)?);
        }
        Ok(properties)
    }

    async fn update(&self, property: Property) -> Result<Property, DomainError> {
        let query = r#"
            UPDATE properties
            SET title = ?, description = ?, price_per_night = ?, address = ?,
                city = ?, country = ?, capacity = ?, bedrooms = ?,
                bathrooms = ?, amenities = ?, is_available = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&property.title)
            .bind(&property.description)
            .bind(property.price_per_night)
            .bind(&property.address)
            .bind(&property.city)
            .bind(&property.country)
            .bind(property.capacity)
            .bind(property.bedrooms)
            .bind(property.bathrooms)
            .bind(&property.amenities)
            .bind(property.is_available)
            .bind(property.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update property: {}", e),
            })?;

        Ok(property)
    }

    async fn delete_for_owner(&self, id: Uuid, owner_id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM properties WHERE id = ? AND owner_id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete property: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
