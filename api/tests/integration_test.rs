//! End-to-end tests running the full routing table against in-memory
//! repositories.

use actix_web::{http::StatusCode, test, web};
use std::sync::Arc;

use sh_api::app::create_app;
use sh_api::routes::AppState;
use sh_core::repositories::{
    MockBookingRepository, MockFavoriteRepository, MockPropertyRepository, MockUserRepository,
};
use sh_core::services::{TokenService, TokenServiceConfig};
use sh_shared::config::{CorsConfig, Environment};

type TestState =
    AppState<MockUserRepository, MockPropertyRepository, MockBookingRepository, MockFavoriteRepository>;

fn test_state() -> web::Data<TestState> {
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::new(
        "integration-test-secret",
        30,
    )));
    web::Data::new(AppState::new(
        Arc::new(MockUserRepository::new()),
        Arc::new(MockPropertyRepository::new()),
        Arc::new(MockBookingRepository::new()),
        Arc::new(MockFavoriteRepository::new()),
        tokens,
    ))
}

fn test_app() -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    create_app(test_state(), Environment::Development, &CorsConfig::default())
}

fn register_body(email: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "username": email.split('@').next().unwrap(),
        "password": "correct-horse-battery",
    })
}

fn property_body(title: &str, price: f64) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "price_per_night": price,
        "city": "Lisbon",
        "capacity": 4,
    })
}

async fn register_and_login(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    email: &str,
) -> String {
    let req = test::TestRequest::post()
        .uri("/api/auth/registration/")
        .set_json(register_body(email))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/auth/login/")
        .set_json(serde_json::json!({
            "email": email,
            "password": "correct-horse-battery",
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["token_type"], "bearer");
    body["access_token"].as_str().unwrap().to_string()
}

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

#[actix_web::test]
async fn test_health_check() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_registration_rejects_duplicate_email() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/registration/")
        .set_json(register_body("dup@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "dup@example.com");
    assert!(body.get("hashed_password").is_none());

    let req = test::TestRequest::post()
        .uri("/api/auth/registration/")
        .set_json(register_body("dup@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "email_already_registered");
}

#[actix_web::test]
async fn test_registration_validates_input() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/registration/")
        .set_json(serde_json::json!({
            "email": "not-an-email",
            "username": "ab",
            "password": "short",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");
    assert!(body["details"].get("email").is_some());
}

#[actix_web::test]
async fn test_login_rejects_bad_credentials() {
    let app = test::init_service(test_app()).await;
    register_and_login(&app, "renter@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login/")
        .set_json(serde_json::json!({
            "email": "renter@example.com",
            "password": "wrong-password",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Unknown email answers identically.
    let req = test::TestRequest::post()
        .uri("/api/auth/login/")
        .set_json(serde_json::json!({
            "email": "ghost@example.com",
            "password": "correct-horse-battery",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_protected_routes_require_token() {
    let app = test::init_service(test_app()).await;

    // The auth middleware rejects at the service level; the error still
    // renders as a 401 response.
    let req = test::TestRequest::get().uri("/api/bookings/").to_request();
    let err = test::try_call_service(&app, req).await.unwrap_err();
    assert_eq!(
        err.as_response_error().status_code(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::get()
        .uri("/api/auth/user/")
        .insert_header(("Authorization", "Bearer not-a-real-token"))
        .to_request();
    let err = test::try_call_service(&app, req).await.unwrap_err();
    assert_eq!(
        err.as_response_error().status_code(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn test_property_crud_flow() {
    let app = test::init_service(test_app()).await;
    let token = register_and_login(&app, "owner@example.com").await;

    // Create
    let req = test::TestRequest::post()
        .uri("/api/properties/")
        .insert_header(bearer(&token))
        .set_json(property_body("Seaside flat", 120.0))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: serde_json::Value = test::read_body_json(resp).await;
    let property_id = created["id"].as_str().unwrap().to_string();

    // Public list
    let req = test::TestRequest::get().uri("/api/properties/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let listed: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // Public detail carries the owner and (empty) booking history
    let req = test::TestRequest::get()
        .uri(&format!("/api/properties/{}/", property_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let detail: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(detail["title"], "Seaside flat");
    assert_eq!(detail["owner"]["email"], "owner@example.com");
    assert_eq!(detail["bookings"].as_array().unwrap().len(), 0);

    // Full-replace update
    let req = test::TestRequest::put()
        .uri(&format!("/api/properties/{}/", property_id))
        .insert_header(bearer(&token))
        .set_json(property_body("Harbour flat", 150.0))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(updated["title"], "Harbour flat");
    assert_eq!(updated["price_per_night"], 150.0);

    // Delete, then the detail is gone
    let req = test::TestRequest::delete()
        .uri(&format!("/api/properties/{}/", property_id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/properties/{}/", property_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_foreign_property_mutation_is_not_found() {
    let app = test::init_service(test_app()).await;
    let owner_token = register_and_login(&app, "owner@example.com").await;
    let stranger_token = register_and_login(&app, "stranger@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/properties/")
        .insert_header(bearer(&owner_token))
        .set_json(property_body("Cabin", 90.0))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let created: serde_json::Value = test::read_body_json(resp).await;
    let property_id = created["id"].as_str().unwrap().to_string();

    // A stranger cannot tell the listing exists: update and delete both 404.
    let req = test::TestRequest::put()
        .uri(&format!("/api/properties/{}/", property_id))
        .insert_header(bearer(&stranger_token))
        .set_json(property_body("Hijacked", 1.0))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/properties/{}/", property_id))
        .insert_header(bearer(&stranger_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_booking_flow_prices_the_stay() {
    let app = test::init_service(test_app()).await;
    let owner_token = register_and_login(&app, "owner@example.com").await;
    let renter_token = register_and_login(&app, "renter@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/properties/")
        .insert_header(bearer(&owner_token))
        .set_json(property_body("Cabin", 100.0))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let created: serde_json::Value = test::read_body_json(resp).await;
    let property_id = created["id"].as_str().unwrap().to_string();

    // Three nights at 100 per night
    let req = test::TestRequest::post()
        .uri("/api/bookings/")
        .insert_header(bearer(&renter_token))
        .set_json(serde_json::json!({
            "property_id": property_id,
            "check_in": "2030-01-01T12:00:00Z",
            "check_out": "2030-01-04T12:00:00Z",
            "guests": 2,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let booking: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(booking["total_price"], 300.0);
    assert_eq!(booking["status"], "pending");
    let booking_id = booking["id"].as_str().unwrap().to_string();

    // The renter sees it, the owner gets 403, a random id is 404
    let req = test::TestRequest::get()
        .uri(&format!("/api/bookings/{}/", booking_id))
        .insert_header(bearer(&renter_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/bookings/{}/", booking_id))
        .insert_header(bearer(&owner_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::get()
        .uri(&format!("/api/bookings/{}/", uuid::Uuid::new_v4()))
        .insert_header(bearer(&renter_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Update reprices: one night only
    let req = test::TestRequest::put()
        .uri(&format!("/api/bookings/{}/", booking_id))
        .insert_header(bearer(&renter_token))
        .set_json(serde_json::json!({
            "property_id": property_id,
            "check_in": "2030-02-01T12:00:00Z",
            "check_out": "2030-02-02T12:00:00Z",
            "guests": 2,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(updated["total_price"], 100.0);

    // Cancel
    let req = test::TestRequest::delete()
        .uri(&format!("/api/bookings/{}/", booking_id))
        .insert_header(bearer(&renter_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri("/api/bookings/")
        .insert_header(bearer(&renter_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let remaining: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(remaining.as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn test_booking_unavailable_property_is_rejected() {
    let app = test::init_service(test_app()).await;
    let owner_token = register_and_login(&app, "owner@example.com").await;
    let renter_token = register_and_login(&app, "renter@example.com").await;

    let mut body = property_body("Closed cabin", 80.0);
    body["is_available"] = serde_json::json!(false);
    let req = test::TestRequest::post()
        .uri("/api/properties/")
        .insert_header(bearer(&owner_token))
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let created: serde_json::Value = test::read_body_json(resp).await;
    let property_id = created["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/bookings/")
        .insert_header(bearer(&renter_token))
        .set_json(serde_json::json!({
            "property_id": property_id,
            "check_in": "2030-01-01T12:00:00Z",
            "check_out": "2030-01-03T12:00:00Z",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "conflict");
}

#[actix_web::test]
async fn test_favorites_are_idempotent_and_scoped() {
    let app = test::init_service(test_app()).await;
    let owner_token = register_and_login(&app, "owner@example.com").await;
    let renter_token = register_and_login(&app, "renter@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/properties/")
        .insert_header(bearer(&owner_token))
        .set_json(property_body("Cabin", 90.0))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let created: serde_json::Value = test::read_body_json(resp).await;
    let property_id = created["id"].as_str().unwrap().to_string();

    // Saving twice returns the same favorite
    let req = test::TestRequest::post()
        .uri("/api/favorites/")
        .insert_header(bearer(&renter_token))
        .set_json(serde_json::json!({ "property_id": property_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let first: serde_json::Value = test::read_body_json(resp).await;

    let req = test::TestRequest::post()
        .uri("/api/favorites/")
        .insert_header(bearer(&renter_token))
        .set_json(serde_json::json!({ "property_id": property_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let second: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(first["id"], second["id"]);

    let req = test::TestRequest::get()
        .uri("/api/favorites/")
        .insert_header(bearer(&renter_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let favorites: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(favorites.as_array().unwrap().len(), 1);

    // A missing property cannot be favorited
    let req = test::TestRequest::post()
        .uri("/api/favorites/")
        .insert_header(bearer(&renter_token))
        .set_json(serde_json::json!({ "property_id": uuid::Uuid::new_v4() }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Only the saver can delete
    let favorite_id = first["id"].as_str().unwrap().to_string();
    let req = test::TestRequest::delete()
        .uri(&format!("/api/favorites/{}/", favorite_id))
        .insert_header(bearer(&owner_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/favorites/{}/", favorite_id))
        .insert_header(bearer(&renter_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn test_profile_aggregates_owned_records() {
    let app = test::init_service(test_app()).await;
    let token = register_and_login(&app, "busy@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/properties/")
        .insert_header(bearer(&token))
        .set_json(property_body("My flat", 75.0))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let created: serde_json::Value = test::read_body_json(resp).await;
    let property_id = created["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/bookings/")
        .insert_header(bearer(&token))
        .set_json(serde_json::json!({
            "property_id": property_id,
            "check_in": "2030-03-01T12:00:00Z",
            "check_out": "2030-03-03T12:00:00Z",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/favorites/")
        .insert_header(bearer(&token))
        .set_json(serde_json::json!({ "property_id": property_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/api/auth/user/")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let profile: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(profile["email"], "busy@example.com");
    assert_eq!(profile["properties"].as_array().unwrap().len(), 1);
    assert_eq!(profile["bookings"].as_array().unwrap().len(), 1);
    assert_eq!(profile["favorites"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_logout_is_stateless() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/logout/")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
