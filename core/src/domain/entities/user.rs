//! User entity representing a registered account in the StayHub system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
///
/// A user owns zero or more properties, bookings (as the renter), and
/// favorites. Those relations are reachable through foreign keys on the
/// owning entities, never through back-pointers on the user itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Unique email address, also the token subject
    pub email: String,

    /// Unique display name
    pub username: String,

    /// Bcrypt hash of the password; never leaves the server
    #[serde(skip_serializing, default)]
    pub hashed_password: String,

    /// Optional given name
    pub first_name: Option<String>,

    /// Optional family name
    pub last_name: Option<String>,

    /// Optional contact phone number
    pub phone: Option<String>,

    /// Whether the account is active; inactive accounts cannot authenticate
    pub is_active: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new active user with a freshly generated id
    pub fn new(
        email: String,
        username: String,
        hashed_password: String,
        first_name: Option<String>,
        last_name: Option<String>,
        phone: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            username,
            hashed_password,
            first_name,
            last_name,
            phone,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Deactivates the account
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_active() {
        let user = User::new(
            "renter@example.com".to_string(),
            "renter".to_string(),
            "$2b$12$hash".to_string(),
            None,
            None,
            None,
        );

        assert!(user.is_active);
        assert_eq!(user.email, "renter@example.com");
        assert_eq!(user.username, "renter");
    }

    #[test]
    fn test_deactivate() {
        let mut user = User::new(
            "renter@example.com".to_string(),
            "renter".to_string(),
            "$2b$12$hash".to_string(),
            None,
            None,
            None,
        );

        user.deactivate();
        assert!(!user.is_active);
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = User::new(
            "renter@example.com".to_string(),
            "renter".to_string(),
            "$2b$12$hash".to_string(),
            None,
            None,
            None,
        );

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("hashed_password").is_none());
    }
}
