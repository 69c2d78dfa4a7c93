//! Booking route handlers
//!
//! All booking endpoints require a bearer token. GET of a single booking
//! distinguishes an absent booking (404) from someone else's booking (403);
//! every mutation collapses the two into 404.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use sh_core::repositories::{
    BookingRepository, FavoriteRepository, PropertyRepository, UserRepository,
};

use crate::dto::{BookingRequest, BookingResponse};
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// GET /api/bookings/ - list the caller's bookings
pub async fn list<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    ctx: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    B: BookingRepository + 'static,
    F: FavoriteRepository + 'static,
{
    let user = match state.auth_service.current_user(&ctx.email).await {
        Ok(user) => user,
        Err(error) => return handle_domain_error(error),
    };

    match state.booking_service.list_bookings(user.id).await {
        Ok(bookings) => HttpResponse::Ok().json(
            bookings
                .into_iter()
                .map(BookingResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/bookings/{id}/ - fetch one booking
pub async fn detail<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    ctx: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    B: BookingRepository + 'static,
    F: FavoriteRepository + 'static,
{
    let user = match state.auth_service.current_user(&ctx.email).await {
        Ok(user) => user,
        Err(error) => return handle_domain_error(error),
    };

    match state
        .booking_service
        .get_booking(path.into_inner(), user.id)
        .await
    {
        Ok(booking) => HttpResponse::Ok().json(BookingResponse::from(booking)),
        Err(error) => handle_domain_error(error),
    }
}

/// POST /api/bookings/ - create a booking for the caller
pub async fn create<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    ctx: AuthContext,
    request: web::Json<BookingRequest>,
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

    let user = match state.auth_service.current_user(&ctx.email).await {
        Ok(user) => user,
        Err(error) => return handle_domain_error(error),
    };

    match state
        .booking_service
        .create_booking(user.id, request.into_inner().into_input())
        .await
    {
        Ok(booking) => HttpResponse::Created().json(BookingResponse::from(booking)),
        Err(error) => handle_domain_error(error),
    }
}

/// PUT /api/bookings/{id}/ - full-replace update of the caller's booking
pub async fn update<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    ctx: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<BookingRequest>,
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

    let user = match state.auth_service.current_user(&ctx.email).await {
        Ok(user) => user,
        Err(error) => return handle_domain_error(error),
    };

    match state
        .booking_service
        .update_booking(path.into_inner(), user.id, request.into_inner().into_input())
        .await
    {
        Ok(booking) => HttpResponse::Ok().json(BookingResponse::from(booking)),
        Err(error) => handle_domain_error(error),
    }
}

/// DELETE /api/bookings/{id}/ - cancel the caller's booking
pub async fn delete<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    ctx: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    B: BookingRepository + 'static,
    F: FavoriteRepository + 'static,
{
    let user = match state.auth_service.current_user(&ctx.email).await {
        Ok(user) => user,
        Err(error) => return handle_domain_error(error),
    };

    match state
        .booking_service
        .delete_booking(path.into_inner(), user.id)
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
