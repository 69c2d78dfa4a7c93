//! Registration payload for creating a user account.

use serde::{Deserialize, Serialize};

/// Data required to register a new account
///
/// Carries the plaintext password from the API layer to the auth service,
/// which hashes it before anything is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}
