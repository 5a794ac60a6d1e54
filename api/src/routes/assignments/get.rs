use axum::{Json, extract::State};
use db::models::assignment;
use util::state::AppState;

use crate::error::ApiResult;
use crate::response::ApiResponse;
use crate::routes::courses::assignments::common::AssignmentResponse;

/// GET /assignments
///
/// All assignments across courses, ordered by id. Empty when there are none.
pub async fn list_all_assignments(
    State(app_state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<AssignmentResponse>>>> {
    let assignments = assignment::Model::list_all_with_courses(app_state.db()).await?;

    Ok(Json(ApiResponse::success(
        assignments.into_iter().map(AssignmentResponse::from).collect(),
        "Assignments retrieved successfully",
    )))
}
