//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Offset/limit pagination parameters for list endpoints
///
/// Matches the `?skip=&limit=` query surface of the public listing
/// endpoints. The limit is capped at [`MAX_LIMIT`] server side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of items to skip from the start of the result set
    #[serde(default)]
    pub skip: u32,

    /// Maximum number of items to return
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

impl Pagination {
    /// Create a new pagination with custom values
    pub fn new(skip: u32, limit: u32) -> Self {
        Self {
            skip,
            limit: limit.clamp(MIN_LIMIT, MAX_LIMIT),
        }
    }

    /// Validate and sanitize pagination parameters
    pub fn validate(mut self) -> Self {
        self.limit = self.limit.clamp(MIN_LIMIT, MAX_LIMIT);
        self
    }

    /// Offset as i64 for SQL queries
    pub fn offset_i64(&self) -> i64 {
        self.skip as i64
    }

    /// Limit as i64 for SQL queries
    pub fn limit_i64(&self) -> i64 {
        self.limit as i64
    }
}

// Constants
const DEFAULT_LIMIT: u32 = 100;
const MIN_LIMIT: u32 = 1;
const MAX_LIMIT: u32 = 100;

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}
