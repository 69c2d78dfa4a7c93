//! Database module - MySQL implementations using SQLx
//!
//! Provides the database access layer:
//! - Connection pool management
//! - Repository pattern implementations

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::{
    MySqlBookingRepository, MySqlFavoriteRepository, MySqlPropertyRepository, MySqlUserRepository,
};
