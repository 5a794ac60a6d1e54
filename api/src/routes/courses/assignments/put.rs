use axum::{
    Extension, Json,
    extract::{Path, State},
};
use db::models::{assignment, course};
use util::state::AppState;

use super::common::{
    ASSIGNMENT_NOT_FOUND, AssignmentResponse, DUPLICATE_ASSIGNMENT, UpdateAssignmentRequest,
};
use crate::auth::{AuthUser, policy};
use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;
use crate::routes::common::validate;
use crate::routes::courses::common::course_not_found;

/// PUT /courses/{course_id}/assignments/{assignment_id}
///
/// Partial update; the assignment is looked up by id alone.
///
/// ### Responses
/// - `200 OK` with the updated assignment
/// - `403 Forbidden` when the caller is not staff or not the author
/// - `404 Not Found` when the course or the assignment does not exist
pub async fn update_assignment(
    State(app_state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path((course_id, assignment_id)): Path<(i64, i64)>,
    Json(req): Json<UpdateAssignmentRequest>,
) -> ApiResult<Json<ApiResponse<AssignmentResponse>>> {
    validate(&req)?;
    let db = app_state.db();

    if course::Model::find_by_id(db, course_id).await?.is_none() {
        return Err(ApiError::NotFound(course_not_found(course_id)));
    }

    let existing = assignment::Model::find_by_id(db, assignment_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(ASSIGNMENT_NOT_FOUND.into()))?;

    if !policy::can_modify_authored(&caller, existing.author_id) {
        return Err(ApiError::Forbidden(
            "You don't have permission to update this assignment".into(),
        ));
    }

    let updated = existing.update(db, req.into()).await.map_err(|e| {
        ApiError::unique_violation_or(e, ApiError::Forbidden(DUPLICATE_ASSIGNMENT.into()))
    })?;

    let view = assignment::Model::find_in_course(db, updated.course_id, updated.id)
        .await?
        .ok_or_else(|| ApiError::NotFound(ASSIGNMENT_NOT_FOUND.into()))?;

    Ok(Json(ApiResponse::success(
        view.into(),
        "Assignment updated successfully",
    )))
}
