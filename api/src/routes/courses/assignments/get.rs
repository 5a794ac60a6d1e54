use axum::{
    Json,
    extract::{Path, State},
};
use db::models::{assignment, course};
use util::state::AppState;

use super::common::{ASSIGNMENT_NOT_FOUND, AssignmentResponse};
use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;

/// GET /courses/{course_id}/assignments
///
/// ### Responses
/// - `200 OK` with the course's assignments ordered by id
/// - `403 Forbidden` when the course does not exist
/// - `404 Not Found` when the course has no assignments
pub async fn list_assignments(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> ApiResult<Json<ApiResponse<Vec<AssignmentResponse>>>> {
    let db = app_state.db();

    if course::Model::find_by_id(db, course_id).await?.is_none() {
        return Err(ApiError::Forbidden(format!(
            "Course with ID: {course_id} is not found"
        )));
    }

    let assignments = assignment::Model::list_for_course(db, course_id).await?;
    if assignments.is_empty() {
        return Err(ApiError::NotFound("Assignment not Found".into()));
    }

    Ok(Json(ApiResponse::success(
        assignments.into_iter().map(AssignmentResponse::from).collect(),
        "Assignments retrieved successfully",
    )))
}

/// GET /courses/{course_id}/assignments/{assignment_id}
///
/// `404 Not Found` when the course does not exist or the assignment is not in it.
pub async fn get_assignment(
    State(app_state): State<AppState>,
    Path((course_id, assignment_id)): Path<(i64, i64)>,
) -> ApiResult<Json<ApiResponse<AssignmentResponse>>> {
    let db = app_state.db();

    if course::Model::find_by_id(db, course_id).await?.is_none() {
        return Err(ApiError::NotFound(format!(
            "Course with ID: {course_id} is not found"
        )));
    }

    let found = assignment::Model::find_in_course(db, course_id, assignment_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(ASSIGNMENT_NOT_FOUND.into()))?;

    Ok(Json(ApiResponse::success(
        found.into(),
        "Assignment retrieved successfully",
    )))
}
