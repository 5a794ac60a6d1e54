use axum::{
    Extension,
    extract::{Path, State},
    http::StatusCode,
};
use db::models::{course, lesson};
use util::state::AppState;

use super::common::LESSON_NOT_FOUND;
use crate::auth::{AuthUser, policy};
use crate::error::{ApiError, ApiResult};
use crate::routes::courses::common::course_not_found;

/// DELETE /courses/{course_id}/lessons/{lesson_id}
///
/// ### Responses
/// - `204 No Content`
/// - `403 Forbidden` when the caller is not staff or not the lesson's author
/// - `404 Not Found` when the course or the lesson does not exist
pub async fn delete_lesson(
    State(app_state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path((course_id, lesson_id)): Path<(i64, i64)>,
) -> ApiResult<StatusCode> {
    let db = app_state.db();

    if course::Model::find_by_id(db, course_id).await?.is_none() {
        return Err(ApiError::NotFound(course_not_found(course_id)));
    }

    let existing = lesson::Model::find_by_id(db, lesson_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(LESSON_NOT_FOUND.into()))?;

    if !policy::can_modify_authored(&caller, existing.author_id) {
        return Err(ApiError::Forbidden(
            "You don't have permission to delete this lesson".into(),
        ));
    }

    existing.delete(db).await?;
    tracing::info!(lesson_id, course_id, by = %caller.username, "lesson deleted");

    Ok(StatusCode::NO_CONTENT)
}
