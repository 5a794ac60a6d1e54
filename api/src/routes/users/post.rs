use axum::{Json, extract::State, http::StatusCode};
use db::models::user;
use util::state::AppState;

use super::common::{CreateUserRequest, UserResponse};
use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;
use crate::routes::common::validate;

const DUPLICATE_USER: &str = "A user with this username or email already exists";

/// POST /users
///
/// ### Request Body
/// ```json
/// {
///   "username": "amina",
///   "email": "amina@example.com",
///   "password": "s3cret!",
///   "role": "student"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with the public user view
/// - `400 Bad Request` on validation failure
/// - `409 Conflict` when the username or email is taken
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(mut req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    req.username = req.username.trim().to_owned();
    validate(&req)?;
    let db = app_state.db();

    if user::Model::username_or_email_taken(db, &req.username, &req.email).await? {
        return Err(ApiError::Conflict(DUPLICATE_USER.into()));
    }

    let user = user::Model::create(db, &req.username, &req.email, &req.password, req.role)
        .await
        .map_err(|e| ApiError::unique_violation_or(e, ApiError::Conflict(DUPLICATE_USER.into())))?;

    tracing::info!(user_id = user.id, role = %user.role, "user created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(user.into(), "User created successfully")),
    ))
}
