//! Property catalog route handlers
//!
//! Reads are public; mutations require a bearer token and only ever touch
//! listings owned by the caller.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use sh_core::repositories::{
    BookingRepository, FavoriteRepository, PropertyRepository, UserRepository,
};
use sh_shared::types::Pagination;

use crate::dto::{BookingResponse, PropertyDetailResponse, PropertyRequest, PropertyResponse};
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// GET /api/properties/ - public listing with skip/limit pagination
pub async fn list<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    pagination: web::Query<Pagination>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    B: BookingRepository + 'static,
    F: FavoriteRepository + 'static,
{
    match state
        .property_service
        .list_properties(pagination.into_inner())
        .await
    {
        Ok(properties) => HttpResponse::Ok().json(
            properties
                .into_iter()
                .map(PropertyResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/properties/{id}/ - public detail with owner and booking history
pub async fn detail<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    B: BookingRepository + 'static,
    F: FavoriteRepository + 'static,
{
    let property_id = path.into_inner();

    let property = match state.property_service.get_property(property_id).await {
        Ok(property) => property,
        Err(error) => return handle_domain_error(error),
    };

    let owner = match state.auth_service.user_by_id(property.owner_id).await {
        Ok(owner) => owner,
        Err(error) => return handle_domain_error(error),
    };
    let bookings = match state.booking_service.list_for_property(property_id).await {
        Ok(bookings) => bookings,
        Err(error) => return handle_domain_error(error),
    };

    HttpResponse::Ok().json(PropertyDetailResponse {
        property: property.into(),
        owner: owner.map(Into::into),
        bookings: bookings.into_iter().map(BookingResponse::from).collect(),
    })
}

/// POST /api/properties/ - create a listing owned by the caller
pub async fn create<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    ctx: AuthContext,
    request: web::Json<PropertyRequest>,
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
        .property_service
        .create_property(user.id, request.into_inner().into_input())
        .await
    {
        Ok(property) => HttpResponse::Created().json(PropertyResponse::from(property)),
        Err(error) => handle_domain_error(error),
    }
}

/// PUT /api/properties/{id}/ - full-replace update of an owned listing
pub async fn update<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    ctx: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<PropertyRequest>,
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
        .property_service
        .update_property(path.into_inner(), user.id, request.into_inner().into_input())
        .await
    {
        Ok(property) => HttpResponse::Ok().json(PropertyResponse::from(property)),
        Err(error) => handle_domain_error(error),
    }
}

/// DELETE /api/properties/{id}/ - delete an owned listing
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
        .property_service
        .delete_property(path.into_inner(), user.id)
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
