//! Favorite route handlers
//!
//! Creating the same (user, property) favorite twice is idempotent; the
//! existing record is returned instead of a duplicate.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use sh_core::repositories::{
    BookingRepository, FavoriteRepository, PropertyRepository, UserRepository,
};

use crate::dto::{FavoriteRequest, FavoriteResponse};
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// GET /api/favorites/ - list the caller's favorites
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

    match state.favorite_service.list_favorites(user.id).await {
        Ok(favorites) => HttpResponse::Ok().json(
            favorites
                .into_iter()
                .map(FavoriteResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(error),
    }
}

/// POST /api/favorites/ - save a property as a favorite
pub async fn create<U, P, B, F>(
    state: web::Data<AppState<U, P, B, F>>,
    ctx: AuthContext,
    request: web::Json<FavoriteRequest>,
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
        .favorite_service
        .create_favorite(user.id, request.property_id)
        .await
    {
        Ok(favorite) => HttpResponse::Created().json(FavoriteResponse::from(favorite)),
        Err(error) => handle_domain_error(error),
    }
}

/// DELETE /api/favorites/{id}/ - remove one of the caller's favorites
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
        .favorite_service
        .delete_favorite(path.into_inner(), user.id)
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
