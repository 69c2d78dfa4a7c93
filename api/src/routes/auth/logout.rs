//! Handler for POST /api/auth/logout/

use actix_web::HttpResponse;

/// Stateless logout
///
/// Tokens carry no server-side session; clients discard the token and this
/// endpoint exists so they have something to call. Expiry is the only
/// server-side invalidation.
pub async fn logout() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Successfully logged out"
    }))
}
