//! Environment detection

use serde::{Deserialize, Serialize};

/// Deployment environment for the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl Environment {
    /// Detect the environment from the `ENVIRONMENT` variable
    pub fn from_env() -> Self {
        match std::env::var("ENVIRONMENT").as_deref() {
            Ok("production") => Environment::Production,
            Ok("staging") => Environment::Staging,
            _ => Environment::Development,
        }
    }

    /// Whether this is a production deployment
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}
