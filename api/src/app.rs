//! Application factory
//!
//! Builds the Actix-web application from an [`AppState`]. Generic over the
//! repository traits so integration tests can run the real routing table
//! against in-memory repositories.

use std::sync::Arc;

use actix_web::{
    middleware::{Compat, Logger},
    web, App, HttpResponse,
};

use sh_core::repositories::{
    BookingRepository, FavoriteRepository, PropertyRepository, UserRepository,
};
use sh_shared::config::{CorsConfig, Environment};

use crate::middleware::{create_cors, JwtAuth};
use crate::routes::{auth, bookings, favorites, properties, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<U, P, B, F>(
    app_state: web::Data<AppState<U, P, B, F>>,
    environment: Environment,
    cors_config: &CorsConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    B: BookingRepository + 'static,
    F: FavoriteRepository + 'static,
{
    let tokens = Arc::clone(&app_state.token_service);
    let cors = create_cors(environment, cors_config);

    // Compat keeps the response body type stable across the outer wraps.
    App::new()
        .app_data(app_state)
        .wrap(Compat::new(Logger::default()))
        .wrap(Compat::new(cors))
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API routes; list/detail paths carry a trailing slash
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/registration/", web::post().to(auth::registration::register::<U, P, B, F>))
                        .route("/login/", web::post().to(auth::login::login::<U, P, B, F>))
                        .route("/logout/", web::post().to(auth::logout::logout))
                        .route(
                            "/user/",
                            web::get()
                                .to(auth::profile::profile::<U, P, B, F>)
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        ),
                )
                .service(
                    web::scope("/properties")
                        .route("/", web::get().to(properties::list::<U, P, B, F>))
                        .route(
                            "/",
                            web::post()
                                .to(properties::create::<U, P, B, F>)
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        )
                        .route("/{id}/", web::get().to(properties::detail::<U, P, B, F>))
                        .route(
                            "/{id}/",
                            web::put()
                                .to(properties::update::<U, P, B, F>)
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        )
                        .route(
                            "/{id}/",
                            web::delete()
                                .to(properties::delete::<U, P, B, F>)
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        ),
                )
                .service(
                    web::scope("/bookings")
                        .route(
                            "/",
                            web::get()
                                .to(bookings::list::<U, P, B, F>)
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        )
                        .route(
                            "/",
                            web::post()
                                .to(bookings::create::<U, P, B, F>)
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        )
                        .route(
                            "/{id}/",
                            web::get()
                                .to(bookings::detail::<U, P, B, F>)
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        )
                        .route(
                            "/{id}/",
                            web::put()
                                .to(bookings::update::<U, P, B, F>)
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        )
                        .route(
                            "/{id}/",
                            web::delete()
                                .to(bookings::delete::<U, P, B, F>)
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        ),
                )
                .service(
                    web::scope("/favorites")
                        .route(
                            "/",
                            web::get()
                                .to(favorites::list::<U, P, B, F>)
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        )
                        .route(
                            "/",
                            web::post()
                                .to(favorites::create::<U, P, B, F>)
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        )
                        .route(
                            "/{id}/",
                            web::delete()
                                .to(favorites::delete::<U, P, B, F>)
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        ),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "stayhub-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
