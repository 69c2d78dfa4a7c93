//! Handler for GET /api/auth/user/

use actix_web::{web, HttpResponse};

use sh_core::repositories::{
    BookingRepository, FavoriteRepository, PropertyRepository, UserRepository,
};

use crate::dto::{BookingResponse, FavoriteResponse, PropertyResponse, UserProfileResponse};
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Return the authenticated account together with everything it owns:
/// listed properties, placed bookings and saved favorites
pub async fn profile<U, P, B, F>(
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

    let properties = match state.property_service.list_by_owner(user.id).await {
        Ok(properties) => properties,
        Err(error) => return handle_domain_error(error),
    };
    let bookings = match state.booking_service.list_bookings(user.id).await {
        Ok(bookings) => bookings,
        Err(error) => return handle_domain_error(error),
    };
    let favorites = match state.favorite_service.list_favorites(user.id).await {
        Ok(favorites) => favorites,
        Err(error) => return handle_domain_error(error),
    };

    HttpResponse::Ok().json(UserProfileResponse {
        user: user.into(),
        properties: properties.into_iter().map(PropertyResponse::from).collect(),
        bookings: bookings.into_iter().map(BookingResponse::from).collect(),
        favorites: favorites.into_iter().map(FavoriteResponse::from).collect(),
    })
}
