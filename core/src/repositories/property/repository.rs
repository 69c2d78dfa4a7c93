//! Property repository trait defining the interface for listing persistence.

use async_trait::async_trait;
use sh_shared::types::Pagination;
use uuid::Uuid;

use crate::domain::entities::property::Property;
use crate::errors::DomainError;

/// Repository trait for Property entity persistence operations
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Persist a new listing
    async fn create(&self, property: Property) -> Result<Property, DomainError>;

    /// Find a listing by id, regardless of owner
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, DomainError>;

    /// Ownership-scoped lookup: find a listing by id only if it is owned
    /// by `owner_id`
    ///
    /// Returns `Ok(None)` both when the listing does not exist and when it
    /// belongs to someone else; callers must not distinguish the two.
    async fn find_for_owner(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<Option<Property>, DomainError>;

    /// List all listings, newest first, with offset/limit pagination
    async fn list(&self, pagination: Pagination) -> Result<Vec<Property>, DomainError>;

    /// List every listing owned by `owner_id`
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Property>, DomainError>;

    /// Replace a stored listing with the given entity (matched by id)
    async fn update(&self, property: Property) -> Result<Property, DomainError>;

    /// Ownership-scoped delete
    ///
    /// # Returns
    /// * `Ok(true)` - Listing was deleted
    /// * `Ok(false)` - Listing absent or owned by someone else
    async fn delete_for_owner(&self, id: Uuid, owner_id: Uuid) -> Result<bool, DomainError>;
}
