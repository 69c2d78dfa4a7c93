//! # Infrastructure Layer
//!
//! Concrete persistence implementations for the StayHub application.
//! The domain layer defines repository traits; this crate provides the
//! MySQL-backed implementations using SQLx.

pub mod database;

pub use database::{
    DatabasePool, MySqlBookingRepository, MySqlFavoriteRepository, MySqlPropertyRepository,
    MySqlUserRepository,
};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
