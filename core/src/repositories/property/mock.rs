//! In-memory implementation of PropertyRepository for testing.

use async_trait::async_trait;
use sh_shared::types::Pagination;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::property::Property;
use crate::errors::DomainError;

use super::repository::PropertyRepository;

/// Mock property repository backed by a HashMap
#[derive(Default)]
pub struct MockPropertyRepository {
    properties: Arc<RwLock<HashMap<Uuid, Property>>>,
}

impl MockPropertyRepository {
    /// Create a new, empty mock repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PropertyRepository for MockPropertyRepository {
    async fn create(&self, property: Property) -> Result<Property, DomainError> {
        let mut properties = self.properties.write().await;
        properties.insert(property.id, property.clone());
        Ok(property)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, DomainError> {
        let properties = self.properties.read().await;
        Ok(properties.get(&id).cloned())
    }

    async fn find_for_owner(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<Option<Property>, DomainError> {
        let properties = self.properties.read().await;
        Ok(properties
            .get(&id)
            .filter(|p| p.owner_id == owner_id)
            .cloned())
    }

    async fn list(&self, pagination: Pagination) -> Result<Vec<Property>, DomainError> {
        let properties = self.properties.read().await;
        let mut all: Vec<Property> = properties.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all
            .into_iter()
            .skip(pagination.skip as usize)
            .take(pagination.limit as usize)
            .collect())
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Property>, DomainError> {
        let properties = self.properties.read().await;
        Ok(properties
            .values()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn update(&self, property: Property) -> Result<Property, DomainError> {
        let mut properties = self.properties.write().await;

        if !properties.contains_key(&property.id) {
            return Err(DomainError::not_found("Property"));
        }

        properties.insert(property.id, property.clone());
        Ok(property)
    }

    async fn delete_for_owner(&self, id: Uuid, owner_id: Uuid) -> Result<bool, DomainError> {
        let mut properties = self.properties.write().await;
        match properties.get(&id) {
            Some(p) if p.owner_id == owner_id => {
                properties.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
