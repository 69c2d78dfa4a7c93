//! MySQL implementation of the FavoriteRepository trait.
//!
//! The (user_id, property_id) pair carries a unique index; the service
//! layer returns the existing row instead of inserting a duplicate.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sh_core::domain::entities::favorite::Favorite;
use sh_core::errors::DomainError;
use sh_core::repositories::FavoriteRepository;

/// MySQL implementation of FavoriteRepository
pub struct MySqlFavoriteRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlFavoriteRepository {
    /// Create a new MySQL favorite repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Favorite entity
    fn row_to_favorite(row: &sqlx::mysql::MySqlRow) -> Result<Favorite, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;
        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Database {
            message: format!("Failed to get user_id: {}", e),
        })?;
        let property_id: String = row
            .try_get("property_id")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get property_id: {}", e),
            })?;

        Ok(Favorite {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid favorite UUID: {}", e),
            })?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Database {
                message: format!("Invalid user UUID: {}", e),
            })?,
            property_id: Uuid::parse_str(&property_id).map_err(|e| DomainError::Database {
                message: format!("Invalid property UUID: {}", e),
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
impl FavoriteRepository for MySqlFavoriteRepository {
    async fn create(&self, favorite: Favorite) -> Result<Favorite, DomainError> {
        let query = r#"
            INSERT INTO favorites (id, user_id, property_id, created_at)
            VALUES (?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(favorite.id.to_string())
            .bind(favorite.user_id.to_string())
            .bind(favorite.property_id.to_string())
            .bind(favorite.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create favorite: {}", e),
            })?;

        Ok(favorite)
    }

    async fn find_by_user_and_property(
        &self,
        user_id: Uuid,
        property_id: Uuid,
    ) -> Result<Option<Favorite>, DomainError> {
        let query = r#"
            SELECT id, user_id, property_id, created_at
            FROM favorites
            WHERE user_id = ? AND property_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(property_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find favorite: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_favorite(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Favorite>, DomainError> {
        let query = r#"
            SELECT id, user_id, property_id, created_at
            FROM favorites
            WHERE user_id = ?
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to list favorites: {}", e),
            })?;

        let mut favorites = Vec::with_capacity(rows.len());
        for row in rows {
            favorites.push(Self::row_to_favorite(&row)?);
        }
        Ok(favorites)
    }

    async fn delete_for_user(&self, id: Uuid, user_id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM favorites WHERE id = ? AND user_id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete favorite: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
