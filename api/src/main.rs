use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::info;
use std::sync::Arc;

use sh_api::app::create_app;
use sh_api::routes::AppState;
use sh_core::services::{TokenService, TokenServiceConfig};
use sh_infra::database::{
    DatabasePool, MySqlBookingRepository, MySqlFavoriteRepository, MySqlPropertyRepository,
    MySqlUserRepository,
};
use sh_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting StayHub API Server");

    // Load configuration
    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    // Initialize database connections
    let database = DatabasePool::new(config.database.clone()).await?;
    let pool = database.get_pool().clone();

    // Create repository implementations
    let users = Arc::new(MySqlUserRepository::new(pool.clone()));
    let properties = Arc::new(MySqlPropertyRepository::new(pool.clone()));
    let bookings = Arc::new(MySqlBookingRepository::new(pool.clone()));
    let favorites = Arc::new(MySqlFavoriteRepository::new(pool));

    // Token service shared between handlers and the auth middleware
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(
        config.jwt.clone(),
    )));

    let environment = config.environment;
    let cors_config = config.cors.clone();

    HttpServer::new(move || {
        let app_state = web::Data::new(AppState::new(
            Arc::clone(&users),
            Arc::clone(&properties),
            Arc::clone(&bookings),
            Arc::clone(&favorites),
            Arc::clone(&token_service),
        ));
        create_app(app_state, environment, &cors_config)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
