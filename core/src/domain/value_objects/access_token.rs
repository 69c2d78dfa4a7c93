//! Issued bearer token returned after a successful login.

use serde::{Deserialize, Serialize};

/// Bearer token issued by the token service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// The signed JWT
    pub access_token: String,

    /// Always `"bearer"`
    pub token_type: String,

    /// Seconds until the token expires
    pub expires_in: i64,
}

impl AccessToken {
    /// Creates a new bearer token value
    pub fn new(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            expires_in,
        }
    }
}
