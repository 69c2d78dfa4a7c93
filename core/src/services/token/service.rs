//! Main token service implementation.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::AccessToken;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Issuer claim stamped into every token
pub const JWT_ISSUER: &str = "stayhub";

/// JWT claims carried by an access token
///
/// The subject is the user's email; resolving it back to an active account
/// is the auth service's job, not the token's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's email address
    pub sub: String,
    /// Issuer, always [`JWT_ISSUER`]
    pub iss: String,
    /// Issued-at as a unix timestamp
    pub iat: i64,
    /// Expiry as a unix timestamp
    pub exp: i64,
    /// Unique token id
    pub jti: String,
}

/// Service for issuing and validating HS256 access tokens
///
/// There is no revocation list; expiry is the only invalidation mechanism.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.validate_exp = true;
        // Expiry is exact; no clock-skew grace period.
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed token binding the user's email to an absolute expiry
    pub fn issue_token(&self, email: &str) -> DomainResult<AccessToken> {
        let now = Utc::now();
        let expires_at = now + Duration::minutes(self.config.ttl_minutes);

        let claims = Claims {
            sub: email.to_string(),
            iss: JWT_ISSUER.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))?;

        Ok(AccessToken::new(token, self.config.ttl_minutes * 60))
    }

    /// Validates a presented token and returns its claims
    ///
    /// # Errors
    /// * [`TokenError::TokenExpired`] - the expiry has passed
    /// * [`TokenError::InvalidSignature`] - signature verification failed
    /// * [`TokenError::InvalidTokenFormat`] - malformed token or claims
    pub fn verify_token(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|error| match error.kind() {
                ErrorKind::ExpiredSignature => DomainError::Token(TokenError::TokenExpired),
                ErrorKind::InvalidSignature => DomainError::Token(TokenError::InvalidSignature),
                _ => DomainError::Token(TokenError::InvalidTokenFormat),
            })
    }
}
