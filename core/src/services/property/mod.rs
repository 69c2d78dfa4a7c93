//! Property catalog with ownership-scoped mutation.

mod service;

pub use service::PropertyService;
