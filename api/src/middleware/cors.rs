//! CORS middleware configuration for cross-origin requests.
//!
//! Environment-aware: development allows any origin for easy local testing,
//! production restricts origins to the configured list.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use sh_shared::config::{CorsConfig, Environment};

/// Creates a CORS middleware instance for the given environment.
pub fn create_cors(environment: Environment, config: &CorsConfig) -> Cors {
    if environment.is_production() {
        create_production_cors(config)
    } else {
        create_development_cors(config)
    }
}

/// Creates CORS configuration for development environment.
fn create_development_cors(config: &CorsConfig) -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::USER_AGENT,
        ])
        .max_age(config.max_age)
}

/// Creates CORS configuration for production environment.
///
/// Only origins listed in the configuration are accepted.
fn create_production_cors(config: &CorsConfig) -> Cors {
    log::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(config.max_age);

    for origin in &config.allowed_origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_development_cors() {
        let _cors = create_cors(Environment::Development, &CorsConfig::default());
    }

    #[test]
    fn test_create_production_cors() {
        let config = CorsConfig {
            allowed_origins: vec!["https://app.stayhub.io".to_string()],
            max_age: 600,
        };
        let _cors = create_cors(Environment::Production, &config);
    }
}
