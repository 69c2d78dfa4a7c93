//! # API Layer
//!
//! HTTP surface of the StayHub application, built on Actix-web. Handlers
//! are generic over the repository traits from the core layer so tests can
//! run the full application against in-memory repositories.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
