//! Translation of domain errors into HTTP responses.
//!
//! Status code mapping:
//! - NotFound -> 404 (covers both absent records and foreign ownership)
//! - Forbidden -> 403
//! - Conflict and duplicate registration -> 400
//! - Credential and token failures -> 401
//! - Validation -> 422
//! - Database and internal failures -> 500 with a generic message

use std::collections::HashMap;

use actix_web::HttpResponse;
use validator::ValidationErrors;

use sh_core::errors::{AuthError, DomainError};
use sh_shared::types::ErrorResponse;

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => HttpResponse::UnprocessableEntity()
            .json(ErrorResponse::new("validation_error", message)),

        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found",
            format!("{} not found", resource),
        )),

        DomainError::Forbidden => HttpResponse::Forbidden().json(ErrorResponse::new(
            "forbidden",
            "Not authorized to access this resource",
        )),

        DomainError::Conflict { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("conflict", message))
        }

        DomainError::Auth(auth_error) => match auth_error {
            AuthError::EmailAlreadyRegistered => HttpResponse::BadRequest().json(
                ErrorResponse::new("email_already_registered", auth_error.to_string()),
            ),
            AuthError::InvalidCredentials => HttpResponse::Unauthorized().json(
                ErrorResponse::new("invalid_credentials", auth_error.to_string()),
            ),
            AuthError::UserNotFound => HttpResponse::Unauthorized()
                .json(ErrorResponse::new("user_not_found", auth_error.to_string())),
        },

        DomainError::Token(token_error) => HttpResponse::Unauthorized()
            .json(ErrorResponse::new("invalid_token", token_error.to_string())),

        DomainError::Database { message } => {
            log::error!("Database error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "database_error",
                "An internal error occurred",
            ))
        }

        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal error occurred",
            ))
        }
    }
}

/// Convert validator failures into a 422 response with per-field details
pub fn validation_error_response(errors: ValidationErrors) -> HttpResponse {
    let mut details = HashMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        details.insert(field.to_string(), serde_json::json!(messages));
    }

    HttpResponse::UnprocessableEntity().json(
        ErrorResponse::new("validation_error", "Invalid request data").with_details(details),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = handle_domain_error(DomainError::not_found("Property"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_forbidden_maps_to_403() {
        let response = handle_domain_error(DomainError::Forbidden);
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_conflict_maps_to_400() {
        let response = handle_domain_error(DomainError::conflict("Property is not available"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_auth_errors_map_to_expected_codes() {
        let response = handle_domain_error(AuthError::EmailAlreadyRegistered.into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = handle_domain_error(AuthError::InvalidCredentials.into());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = handle_domain_error(AuthError::UserNotFound.into());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_database_error_hides_detail() {
        let response = handle_domain_error(DomainError::Database {
            message: "connection refused to mysql://secret-host".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
