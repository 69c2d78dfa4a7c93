//! Main property catalog implementation.

use std::sync::Arc;

use sh_shared::types::Pagination;
use uuid::Uuid;

use crate::domain::entities::property::Property;
use crate::domain::value_objects::PropertyInput;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::PropertyRepository;

/// Property catalog service
///
/// Reads are public; mutations are ownership-scoped and collapse "absent"
/// and "owned by someone else" into a single not-found outcome.
pub struct PropertyService<P>
where
    P: PropertyRepository,
{
    properties: Arc<P>,
}

impl<P> PropertyService<P>
where
    P: PropertyRepository,
{
    /// Create a new property service
    pub fn new(properties: Arc<P>) -> Self {
        Self { properties }
    }

    /// Create a listing owned by the caller
    pub async fn create_property(
        &self,
        owner_id: Uuid,
        input: PropertyInput,
    ) -> DomainResult<Property> {
        validate_input(&input)?;
        let property = self.properties.create(Property::new(owner_id, input)).await?;
        tracing::info!(property_id = %property.id, owner_id = %owner_id, "created property");
        Ok(property)
    }

    /// Fetch a listing by id
    pub async fn get_property(&self, id: Uuid) -> DomainResult<Property> {
        self.properties
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Property"))
    }

    /// List all listings with offset/limit pagination
    pub async fn list_properties(&self, pagination: Pagination) -> DomainResult<Vec<Property>> {
        self.properties.list(pagination.validate()).await
    }

    /// List every listing owned by `owner_id`
    pub async fn list_by_owner(&self, owner_id: Uuid) -> DomainResult<Vec<Property>> {
        self.properties.list_by_owner(owner_id).await
    }

    /// Replace a listing owned by `owner_id` (full-replace semantics,
    /// ownership stays with the original owner)
    pub async fn update_property(
        &self,
        id: Uuid,
        owner_id: Uuid,
        input: PropertyInput,
    ) -> DomainResult<Property> {
        validate_input(&input)?;

        let mut property = self
            .properties
            .find_for_owner(id, owner_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Property"))?;

        property.apply(input);
        self.properties.update(property).await
    }

    /// Delete a listing owned by `owner_id`
    pub async fn delete_property(&self, id: Uuid, owner_id: Uuid) -> DomainResult<()> {
        if !self.properties.delete_for_owner(id, owner_id).await? {
            return Err(DomainError::not_found("Property"));
        }
        Ok(())
    }
}

fn validate_input(input: &PropertyInput) -> DomainResult<()> {
    if input.price_per_night <= 0.0 {
        return Err(DomainError::Validation {
            message: "price_per_night must be positive".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockPropertyRepository;

    fn input(title: &str, price_per_night: f64) -> PropertyInput {
        PropertyInput {
            title: title.to_string(),
            description: None,
            price_per_night,
            address: None,
            city: None,
            country: None,
            capacity: 2,
            bedrooms: 1,
            bathrooms: 1,
            amenities: None,
            is_available: true,
        }
    }

    fn service() -> PropertyService<MockPropertyRepository> {
        PropertyService::new(Arc::new(MockPropertyRepository::new()))
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let service = service();
        let owner = Uuid::new_v4();

        let property = service
            .create_property(owner, input("Cabin", 90.0))
            .await
            .unwrap();
        let fetched = service.get_property(property.id).await.unwrap();

        assert_eq!(fetched.title, "Cabin");
        assert_eq!(fetched.owner_id, owner);
    }

    #[tokio::test]
    async fn test_rejects_non_positive_price() {
        let service = service();
        let error = service
            .create_property(Uuid::new_v4(), input("Cabin", 0.0))
            .await
            .unwrap_err();
        assert!(matches!(error, DomainError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_keeps_owner() {
        let service = service();
        let owner = Uuid::new_v4();

        let property = service
            .create_property(owner, input("Cabin", 90.0))
            .await
            .unwrap();
        let updated = service
            .update_property(property.id, owner, input("Chalet", 140.0))
            .await
            .unwrap();

        assert_eq!(updated.title, "Chalet");
        assert_eq!(updated.owner_id, owner);
        assert_eq!(updated.id, property.id);
    }

    #[tokio::test]
    async fn test_foreign_mutation_collapses_to_not_found() {
        let service = service();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let property = service
            .create_property(owner, input("Cabin", 90.0))
            .await
            .unwrap();

        let foreign_update = service
            .update_property(property.id, stranger, input("Taken", 1.0))
            .await
            .unwrap_err();
        let missing_update = service
            .update_property(Uuid::new_v4(), owner, input("Ghost", 1.0))
            .await
            .unwrap_err();
        assert_eq!(foreign_update.to_string(), missing_update.to_string());

        let foreign_delete = service
            .delete_property(property.id, stranger)
            .await
            .unwrap_err();
        assert!(matches!(foreign_delete, DomainError::NotFound { .. }));

        // The listing is untouched by the failed attempts.
        assert_eq!(service.get_property(property.id).await.unwrap().title, "Cabin");
    }

    #[tokio::test]
    async fn test_list_pagination() {
        let service = service();
        let owner = Uuid::new_v4();
        for i in 0..5 {
            service
                .create_property(owner, input(&format!("P{}", i), 50.0))
                .await
                .unwrap();
        }

        let page = service
            .list_properties(Pagination::new(2, 2))
            .await
            .unwrap();
        assert_eq!(page.len(), 2);

        let mine = service.list_by_owner(owner).await.unwrap();
        assert_eq!(mine.len(), 5);
    }
}
