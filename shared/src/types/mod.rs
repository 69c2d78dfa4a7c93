//! Common type definitions shared across server modules

pub mod pagination;
pub mod response;

pub use pagination::Pagination;
pub use response::ErrorResponse;
