use crate::response::ApiResponse;
use axum::{Json, Router, response::IntoResponse, routing::get};
use util::state::AppState;

/// Builds the `/health` route group.
///
/// A single `GET /health` endpoint for uptime checks and load balancers.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /
///
/// API banner.
///
/// ```json
/// { "success": true, "data": "Online Classroom API", "message": "Welcome" }
/// ```
pub async fn banner() -> impl IntoResponse {
    Json(ApiResponse::success("Online Classroom API", "Welcome"))
}

/// GET /health
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// {
///   "success": true,
///   "data": "OK",
///   "message": "Health check passed"
/// }
/// ```
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success("OK", "Health check passed"))
}
