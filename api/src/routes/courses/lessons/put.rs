use axum::{
    Extension, Json,
    extract::{Path, State},
};
use db::models::{course, lesson};
use util::state::AppState;

use super::common::{LESSON_NOT_FOUND, LessonResponse, UpdateLessonRequest};
use crate::auth::{AuthUser, policy};
use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;
use crate::routes::common::validate;
use crate::routes::courses::common::course_not_found;

/// PUT /courses/{course_id}/lessons/{lesson_id}
///
/// Partial update. The lesson is looked up by id alone once the course is
/// known to exist.
///
/// ### Responses
/// - `200 OK` with the updated lesson
/// - `403 Forbidden` when the caller is not staff or not the lesson's author
/// - `404 Not Found` when the course or the lesson does not exist
pub async fn update_lesson(
    State(app_state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path((course_id, lesson_id)): Path<(i64, i64)>,
    Json(req): Json<UpdateLessonRequest>,
) -> ApiResult<Json<ApiResponse<LessonResponse>>> {
    validate(&req)?;
    let db = app_state.db();

    if course::Model::find_by_id(db, course_id).await?.is_none() {
        return Err(ApiError::NotFound(course_not_found(course_id)));
    }

    let existing = lesson::Model::find_by_id(db, lesson_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(LESSON_NOT_FOUND.into()))?;

    if !policy::can_modify_authored(&caller, existing.author_id) {
        return Err(ApiError::Forbidden(
            "You don't have permission to update this lesson".into(),
        ));
    }

    let updated = existing.update(db, req.into()).await.map_err(|e| {
        ApiError::unique_violation_or(
            e,
            ApiError::Forbidden("A lesson with this title or content already exists".into()),
        )
    })?;

    let view = lesson::Model::find_in_course(db, updated.course_id, updated.id)
        .await?
        .ok_or_else(|| ApiError::NotFound(LESSON_NOT_FOUND.into()))?;

    Ok(Json(ApiResponse::success(
        view.into(),
        "Lesson updated successfully",
    )))
}
