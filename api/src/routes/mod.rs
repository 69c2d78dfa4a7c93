//! Route handlers grouped by resource.

pub mod auth;
pub mod bookings;
pub mod favorites;
pub mod properties;

use std::sync::Arc;

use sh_core::repositories::{
    BookingRepository, FavoriteRepository, PropertyRepository, UserRepository,
};
use sh_core::services::{
    AuthService, BookingService, FavoriteService, PropertyService, TokenService,
};

/// Application state that holds shared services
///
/// Generic over the repository traits so the full application can run
/// against in-memory repositories in tests.
pub struct AppState<U, P, B, F>
where
    U: UserRepository,
    P: PropertyRepository,
    B: BookingRepository,
    F: FavoriteRepository,
{
    pub auth_service: AuthService<U>,
    pub token_service: Arc<TokenService>,
    pub property_service: PropertyService<P>,
    pub booking_service: BookingService<B, P>,
    pub favorite_service: FavoriteService<F, P>,
}

impl<U, P, B, F> AppState<U, P, B, F>
where
    U: UserRepository,
    P: PropertyRepository,
    B: BookingRepository,
    F: FavoriteRepository,
{
    /// Wire up all services from their repositories and token configuration
    pub fn new(
        users: Arc<U>,
        properties: Arc<P>,
        bookings: Arc<B>,
        favorites: Arc<F>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            auth_service: AuthService::new(users, Arc::clone(&token_service)),
            token_service,
            property_service: PropertyService::new(Arc::clone(&properties)),
            booking_service: BookingService::new(bookings, Arc::clone(&properties)),
            favorite_service: FavoriteService::new(favorites, properties),
        }
    }
}
