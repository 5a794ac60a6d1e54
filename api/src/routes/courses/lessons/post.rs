use axum::{
    Extension, Json,
    extract::{Path, State},
};
use db::models::{course, lesson};
use util::state::AppState;

use super::common::{CreateLessonRequest, LessonResponse};
use crate::auth::{AuthUser, policy};
use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;
use crate::routes::common::validate;

/// POST /courses/{course_id}/lessons
///
/// ### Request Body
/// ```json
/// { "lesson_title": "Ownership", "lesson_content": "Moves and borrows" }
/// ```
///
/// ### Responses
/// - `200 OK` with the lesson view
/// - `403 Forbidden`, in check order: course missing, caller is not staff or
///   not the course owner, title taken, content taken
pub async fn create_lesson(
    State(app_state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(course_id): Path<i64>,
    Json(req): Json<CreateLessonRequest>,
) -> ApiResult<Json<ApiResponse<LessonResponse>>> {
    validate(&req)?;
    let db = app_state.db();

    let (course, owner) = course::Model::find_with_owner(db, course_id)
        .await?
        .ok_or_else(|| ApiError::Forbidden(format!("Course with ID: {course_id} is not found")))?;

    if !policy::can_author_in_course(&caller, &owner) {
        return Err(ApiError::Forbidden(format!(
            "You don't have permission to add new lessons to: [ {} ]",
            course.name
        )));
    }

    if lesson::Model::title_exists(db, &req.lesson_title).await? {
        return Err(ApiError::Forbidden(format!(
            "You already have a lesson titled [ {} ]",
            req.lesson_title
        )));
    }

    if lesson::Model::content_exists(db, &req.lesson_content).await? {
        return Err(ApiError::Forbidden(format!(
            "You've already added this lesson data content to {} Course",
            course.name
        )));
    }

    let created = lesson::Model::create(db, caller.id, course.id, req.into())
        .await
        .map_err(|e| {
            ApiError::unique_violation_or(
                e,
                ApiError::Forbidden("A lesson with this title or content already exists".into()),
            )
        })?;

    tracing::info!(lesson_id = created.id, course_id, author = %caller.username, "lesson created");

    Ok(Json(ApiResponse::success(
        (created, course).into(),
        "Lesson created successfully",
    )))
}
