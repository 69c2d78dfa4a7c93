//! Domain-specific error types and error handling.
//!
//! Error messages here are transport-agnostic; the API layer translates
//! them into HTTP status codes and response envelopes.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password; deliberately indistinguishable
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// The token subject no longer resolves to an active user
    #[error("User not found")]
    UserNotFound,

    /// Registration attempted with an email that is already taken
    #[error("Email already registered")]
    EmailAlreadyRegistered,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Absent record, or present but owned by someone else; the two cases
    /// are collapsed on purpose so callers cannot probe for existence
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// The record exists and the caller may know it, but may not act on it
    #[error("Not authorized")]
    Forbidden,

    /// Request conflicts with current state (duplicate email, property
    /// not available)
    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Shorthand for the ownership-collapsed not-found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    /// Shorthand for a state-conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        DomainError::Conflict {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
