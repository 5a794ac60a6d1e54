use axum::{
    Extension,
    extract::{Path, State},
    http::StatusCode,
};
use db::models::course;
use util::state::AppState;

use super::common::course_not_found;
use crate::auth::{AuthUser, policy};
use crate::error::{ApiError, ApiResult};

/// DELETE /courses/{course_id}
///
/// Deletes the course together with its lessons, assignments and enrollments.
///
/// ### Responses
/// - `204 No Content`
/// - `403 Forbidden` when the course does not exist, or the caller is neither
///   the owner nor an admin
pub async fn delete_course(
    State(app_state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(course_id): Path<i64>,
) -> ApiResult<StatusCode> {
    let db = app_state.db();

    let existing = course::Model::find_by_id(db, course_id)
        .await?
        .ok_or_else(|| ApiError::Forbidden(course_not_found(course_id)))?;

    if !policy::can_manage_course(&caller, &existing) {
        return Err(ApiError::Forbidden(
            "You don't have permission to delete this course".into(),
        ));
    }

    existing.delete(db).await?;
    tracing::info!(course_id, by = %caller.username, "course deleted");

    Ok(StatusCode::NO_CONTENT)
}
