//! Token service configuration.

use sh_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HS256 signing secret
    pub secret: String,

    /// Access token time-to-live in minutes
    pub ttl_minutes: i64,
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            secret: config.secret,
            ttl_minutes: config.access_token_ttl_minutes,
        }
    }
}

impl TokenServiceConfig {
    /// Create a new configuration
    pub fn new(secret: impl Into<String>, ttl_minutes: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl_minutes,
        }
    }
}
