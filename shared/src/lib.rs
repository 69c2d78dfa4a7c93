//! Shared utilities and common types for the StayHub server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Pagination helpers for list endpoints
//! - The standard error response envelope

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig, ServerConfig};
pub use types::{ErrorResponse, Pagination};
