//! Favorite entity marking a property as saved by a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Favorite entity linking a user to a property
///
/// At most one favorite exists per (user, property) pair; creating a
/// duplicate returns the existing record instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    /// Unique identifier for the favorite
    pub id: Uuid,

    /// The user who saved the property
    pub user_id: Uuid,

    /// The saved property
    pub property_id: Uuid,

    /// Timestamp when the favorite was created
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    /// Creates a new favorite for the (user, property) pair
    pub fn new(user_id: Uuid, property_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            property_id,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_favorite() {
        let user_id = Uuid::new_v4();
        let property_id = Uuid::new_v4();
        let favorite = Favorite::new(user_id, property_id);

        assert_eq!(favorite.user_id, user_id);
        assert_eq!(favorite.property_id, property_id);
    }
}
