//! DTOs for favorite endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sh_core::domain::entities::favorite::Favorite;

/// Request body for POST /api/favorites/
#[derive(Debug, Clone, Deserialize)]
pub struct FavoriteRequest {
    pub property_id: Uuid,
}

/// Public representation of a favorite
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub property_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Favorite> for FavoriteResponse {
    fn from(favorite: Favorite) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            property_id: favorite.property_id,
            created_at: favorite.created_at,
        }
    }
}
