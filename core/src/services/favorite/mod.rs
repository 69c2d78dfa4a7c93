//! Favorite registry with idempotent create semantics.

mod service;

pub use service::FavoriteService;
