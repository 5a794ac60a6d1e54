use axum::{Json, extract::State};
use db::models::user;
use util::state::AppState;

use super::common::UserResponse;
use crate::error::ApiResult;
use crate::response::ApiResponse;

/// GET /users
///
/// Lists all users ordered by id. An empty platform yields an empty array.
pub async fn list_users(
    State(app_state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<UserResponse>>>> {
    let users = user::Model::list(app_state.db()).await?;

    Ok(Json(ApiResponse::success(
        users.into_iter().map(UserResponse::from).collect(),
        "Users retrieved successfully",
    )))
}
