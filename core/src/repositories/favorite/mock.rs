//! In-memory implementation of FavoriteRepository for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::favorite::Favorite;
use crate::errors::DomainError;

use super::repository::FavoriteRepository;

/// Mock favorite repository backed by a HashMap
#[derive(Default)]
pub struct MockFavoriteRepository {
    favorites: Arc<RwLock<HashMap<Uuid, Favorite>>>,
}

impl MockFavoriteRepository {
    /// Create a new, empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored favorites; used to assert idempotency
    pub async fn count(&self) -> usize {
        self.favorites.read().await.len()
    }
}

#[async_trait]
impl FavoriteRepository for MockFavoriteRepository {
    async fn create(&self, favorite: Favorite) -> Result<Favorite, DomainError> {
        let mut favorites = self.favorites.write().await;

        if favorites
            .values()
            .any(|f| f.user_id == favorite.user_id && f.property_id == favorite.property_id)
        {
            return Err(DomainError::conflict("Favorite already exists"));
        }

        favorites.insert(favorite.id, favorite.clone());
        Ok(favorite)
    }

    async fn find_by_user_and_property(
        &self,
        user_id: Uuid,
        property_id: Uuid,
    ) -> Result<Option<Favorite>, DomainError> {
        let favorites = self.favorites.read().await;
        Ok(favorites
            .values()
            .find(|f| f.user_id == user_id && f.property_id == property_id)
            .cloned())
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Favorite>, DomainError> {
        let favorites = self.favorites.read().await;
        Ok(favorites
            .values()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete_for_user(&self, id: Uuid, user_id: Uuid) -> Result<bool, DomainError> {
        let mut favorites = self.favorites.write().await;
        match favorites.get(&id) {
            Some(f) if f.user_id == user_id => {
                favorites.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
