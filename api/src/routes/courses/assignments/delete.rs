use axum::{
    Extension,
    extract::{Path, State},
    http::StatusCode,
};
use db::models::{assignment, course};
use util::state::AppState;

use super::common::ASSIGNMENT_NOT_FOUND;
use crate::auth::{AuthUser, policy};
use crate::error::{ApiError, ApiResult};
use crate::routes::courses::common::course_not_found;

/// DELETE /courses/{course_id}/assignments/{assignment_id}
///
/// ### Responses
/// - `204 No Content`
/// - `403 Forbidden` when the caller is not staff or not the author
/// - `404 Not Found` when the course or the assignment does not exist
pub async fn delete_assignment(
    State(app_state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path((course_id, assignment_id)): Path<(i64, i64)>,
) -> ApiResult<StatusCode> {
    let db = app_state.db();

    if course::Model::find_by_id(db, course_id).await?.is_none() {
        return Err(ApiError::NotFound(course_not_found(course_id)));
    }

    let existing = assignment::Model::find_by_id(db, assignment_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(ASSIGNMENT_NOT_FOUND.into()))?;

    if !policy::can_modify_authored(&caller, existing.author_id) {
        return Err(ApiError::Forbidden(
            "You don't have permission to delete this assignment".into(),
        ));
    }

    existing.delete(db).await?;
    tracing::info!(assignment_id, course_id, by = %caller.username, "assignment deleted");

    Ok(StatusCode::NO_CONTENT)
}
