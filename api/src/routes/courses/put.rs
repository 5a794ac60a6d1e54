use axum::{
    Extension, Json,
    extract::{Path, State},
};
use db::models::course;
use util::state::AppState;

use super::common::{CourseResponse, UpdateCourseRequest, course_not_found, duplicate_course};
use crate::auth::{AuthUser, policy};
use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;
use crate::routes::common::validate;

/// PUT /courses/{course_id}
///
/// Partial update: only the supplied fields change.
///
/// ### Responses
/// - `200 OK` with the merged course
/// - `403 Forbidden` when the caller is neither the owner nor an admin
/// - `404 Not Found` when the course does not exist
pub async fn update_course(
    State(app_state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(course_id): Path<i64>,
    Json(req): Json<UpdateCourseRequest>,
) -> ApiResult<Json<ApiResponse<CourseResponse>>> {
    validate(&req)?;
    let db = app_state.db();

    let existing = course::Model::find_by_id(db, course_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(course_not_found(course_id)))?;

    if !policy::can_manage_course(&caller, &existing) {
        return Err(ApiError::Forbidden(
            "You don't have permission to update this course".into(),
        ));
    }

    let new_name = req.course_name.clone().unwrap_or_default();
    existing
        .update(db, req.into())
        .await
        .map_err(|e| ApiError::unique_violation_or(e, ApiError::Forbidden(duplicate_course(&new_name))))?;

    let updated = course::Model::find_with_owner(db, course_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(course_not_found(course_id)))?;

    Ok(Json(ApiResponse::success(
        updated.into(),
        "Course updated successfully",
    )))
}
