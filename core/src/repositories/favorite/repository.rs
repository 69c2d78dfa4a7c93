//! Favorite repository trait defining the interface for favorite
//! persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::favorite::Favorite;
use crate::errors::DomainError;

/// Repository trait for Favorite entity persistence operations
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Persist a new favorite
    async fn create(&self, favorite: Favorite) -> Result<Favorite, DomainError>;

    /// Find the favorite for a (user, property) pair, if one exists
    ///
    /// The pair is unique, so at most one record can match.
    async fn find_by_user_and_property(
        &self,
        user_id: Uuid,
        property_id: Uuid,
    ) -> Result<Option<Favorite>, DomainError>;

    /// List every favorite saved by `user_id`
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Favorite>, DomainError>;

    /// Ownership-scoped delete
    ///
    /// # Returns
    /// * `Ok(true)` - Favorite was deleted
    /// * `Ok(false)` - Favorite absent or saved by someone else
    async fn delete_for_user(&self, id: Uuid, user_id: Uuid) -> Result<bool, DomainError>;
}
