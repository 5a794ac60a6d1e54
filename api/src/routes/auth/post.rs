use axum::{Json, extract::State};
use db::models::user;
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

use crate::auth::generate_jwt;
use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;
use crate::routes::common::validate;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// POST /login
///
/// ### Request Body
/// ```json
/// { "username": "amina", "password": "s3cret!" }
/// ```
///
/// ### Responses
/// - `200 OK` with `{ "access_token": "...", "token_type": "bearer" }`
/// - `400 Bad Request` on empty fields
/// - `403 Forbidden` on unknown username or wrong password
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<ApiResponse<TokenResponse>>> {
    validate(&req)?;

    let user = user::Model::verify_credentials(app_state.db(), &req.username, &req.password)
        .await?
        .ok_or_else(|| ApiError::Forbidden("Invalid Credentials".into()))?;

    let access_token = generate_jwt(app_state.jwt(), &user.username)
        .map_err(|e| ApiError::Internal(format!("Failed to sign token: {e}")))?;

    tracing::info!(user = %user.username, "login succeeded");

    Ok(Json(ApiResponse::success(
        TokenResponse {
            access_token,
            token_type: "bearer".into(),
        },
        "Login successful",
    )))
}
