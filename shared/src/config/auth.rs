//! JWT token configuration

use serde::{Deserialize, Serialize};

/// Configuration for issuing and validating access tokens
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret used for HS256 signing
    pub secret: String,

    /// Access token time-to-live in minutes
    pub access_token_ttl_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("change-me-in-production"),
            access_token_ttl_minutes: DEFAULT_ACCESS_TOKEN_TTL_MINUTES,
        }
    }
}

impl JwtConfig {
    /// Create a new configuration with an explicit secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    ///
    /// Reads `JWT_SECRET` and `ACCESS_TOKEN_EXPIRE_MINUTES`.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| "change-me-in-production".to_string());
        let access_token_ttl_minutes = std::env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
            .unwrap_or_else(|_| DEFAULT_ACCESS_TOKEN_TTL_MINUTES.to_string())
            .parse()
            .unwrap_or(DEFAULT_ACCESS_TOKEN_TTL_MINUTES);

        Self {
            secret,
            access_token_ttl_minutes,
        }
    }
}

const DEFAULT_ACCESS_TOKEN_TTL_MINUTES: i64 = 30;
