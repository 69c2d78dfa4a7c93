//! Handler for POST /api/auth/registration/

use actix_web::{web, HttpResponse};
use validator::Validate;

use sh_core::repositories::{
    BookingRepository, FavoriteRepository, PropertyRepository, UserRepository,
};

use crate::dto::{RegisterRequest, UserResponse};
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::routes::AppState;

/// Register a new account
///
/// Returns 201 with the created account, or 400 when the email is already
/// taken. The duplicate check happens before anything is written.
pub async fn register<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    request: web::Json<RegisterRequest>,
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
        .register(request.into_inner().into_new_user())
        .await
    {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}
