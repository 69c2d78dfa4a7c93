//! Handler for POST /api/auth/login/

use actix_web::{web, HttpResponse};
use validator::Validate;

use sh_core::repositories::{
    BookingRepository, FavoriteRepository, PropertyRepository, UserRepository,
};

use crate::dto::LoginRequest;
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::routes::AppState;

/// Authenticate and issue a bearer token
///
/// Unknown email and wrong password both answer 401 with the same message.
pub async fn login<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    B: BookingRepository + 'static,
    F: FavoriteRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(token) => HttpResponse::Ok().json(token),
        Err(error) => handle_domain_error(error),
    }
}
