//! Main favorite registry implementation.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::favorite::Favorite;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{FavoriteRepository, PropertyRepository};

/// Favorite registry enforcing at most one favorite per (user, property)
/// pair
pub struct FavoriteService<F, P>
where
    F: FavoriteRepository,
    P: PropertyRepository,
{
    favorites: Arc<F>,
    properties: Arc<P>,
}

impl<F, P> FavoriteService<F, P>
where
    F: FavoriteRepository,
    P: PropertyRepository,
{
    /// Create a new favorite service
    pub fn new(favorites: Arc<F>, properties: Arc<P>) -> Self {
        Self {
            favorites,
            properties,
        }
    }

    /// Save a property as a favorite (idempotent)
    ///
    /// When the pair already exists, the existing record is returned and
    /// nothing new is created.
    ///
    /// # Errors
    /// * `NotFound` - the property does not exist
    pub async fn create_favorite(
        &self,
        user_id: Uuid,
        property_id: Uuid,
    ) -> DomainResult<Favorite> {
        if self.properties.find_by_id(property_id).await?.is_none() {
            return Err(DomainError::not_found("Property"));
        }

        if let Some(existing) = self
            .favorites
            .find_by_user_and_property(user_id, property_id)
            .await?
        {
            return Ok(existing);
        }

        self.favorites
            .create(Favorite::new(user_id, property_id))
            .await
    }

    /// List every favorite saved by the user
    pub async fn list_favorites(&self, user_id: Uuid) -> DomainResult<Vec<Favorite>> {
        self.favorites.list_by_user(user_id).await
    }

    /// Delete a favorite saved by `user_id`
    ///
    /// Absent and foreign favorites are indistinguishable: both fail with
    /// `NotFound`.
    pub async fn delete_favorite(&self, favorite_id: Uuid, user_id: Uuid) -> DomainResult<()> {
        if !self.favorites.delete_for_user(favorite_id, user_id).await? {
            return Err(DomainError::not_found("Favorite"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::property::Property;
    use crate::domain::value_objects::PropertyInput;
    use crate::repositories::{MockFavoriteRepository, MockPropertyRepository};

    async fn seeded() -> (
        FavoriteService<MockFavoriteRepository, MockPropertyRepository>,
        Arc<MockFavoriteRepository>,
        Uuid,
    ) {
        let favorites = Arc::new(MockFavoriteRepository::new());
        let properties = Arc::new(MockPropertyRepository::new());
        let property = properties
            .create(Property::new(
                Uuid::new_v4(),
                PropertyInput {
                    title: "Cabin".to_string(),
                    description: None,
                    price_per_night: 90.0,
                    address: None,
                    city: None,
                    country: None,
                    capacity: 2,
                    bedrooms: 1,
                    bathrooms: 1,
                    amenities: None,
                    is_available: true,
                },
            ))
            .await
            .unwrap();
        (
            FavoriteService::new(favorites.clone(), properties),
            favorites,
            property.id,
        )
    }

    #[tokio::test]
    async fn test_create_is_idempotent() {
        let (service, favorites, property_id) = seeded().await;
        let user = Uuid::new_v4();

        let first = service.create_favorite(user, property_id).await.unwrap();
        let second = service.create_favorite(user, property_id).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(favorites.count().await, 1);
    }

    #[tokio::test]
    async fn test_create_requires_existing_property() {
        let (service, favorites, _) = seeded().await;

        let error = service
            .create_favorite(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(error, DomainError::NotFound { .. }));
        assert_eq!(favorites.count().await, 0);
    }

    #[tokio::test]
    async fn test_delete_foreign_collapses_to_not_found() {
        let (service, favorites, property_id) = seeded().await;
        let user = Uuid::new_v4();

        let favorite = service.create_favorite(user, property_id).await.unwrap();

        let error = service
            .delete_favorite(favorite.id, Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(error, DomainError::NotFound { .. }));
        assert_eq!(favorites.count().await, 1);

        service.delete_favorite(favorite.id, user).await.unwrap();
        assert_eq!(favorites.count().await, 0);
    }

    #[tokio::test]
    async fn test_list_is_user_scoped() {
        let (service, _, property_id) = seeded().await;
        let user = Uuid::new_v4();

        service.create_favorite(user, property_id).await.unwrap();
        service
            .create_favorite(Uuid::new_v4(), property_id)
            .await
            .unwrap();

        assert_eq!(service.list_favorites(user).await.unwrap().len(), 1);
    }
}
