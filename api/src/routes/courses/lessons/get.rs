use axum::{
    Json,
    extract::{Path, State},
};
use db::models::lesson;
use util::state::AppState;

use super::common::{LESSON_NOT_FOUND, LessonResponse};
use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;

/// GET /courses/{course_id}/lessons
///
/// Lists the course's lessons ordered by id. Course existence is not checked:
/// an unknown course and a course without lessons both answer `404`.
pub async fn list_lessons(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> ApiResult<Json<ApiResponse<Vec<LessonResponse>>>> {
    let lessons = lesson::Model::list_for_course(app_state.db(), course_id).await?;

    if lessons.is_empty() {
        return Err(ApiError::NotFound(
            "This course doesn't have a lesson yet".into(),
        ));
    }

    Ok(Json(ApiResponse::success(
        lessons.into_iter().map(LessonResponse::from).collect(),
        "Lessons retrieved successfully",
    )))
}

/// GET /courses/{course_id}/lessons/{lesson_id}
///
/// `404 Not Found` unless the lesson exists and belongs to the course.
pub async fn get_lesson(
    State(app_state): State<AppState>,
    Path((course_id, lesson_id)): Path<(i64, i64)>,
) -> ApiResult<Json<ApiResponse<LessonResponse>>> {
    let found = lesson::Model::find_in_course(app_state.db(), course_id, lesson_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(LESSON_NOT_FOUND.into()))?;

    Ok(Json(ApiResponse::success(
        found.into(),
        "Lesson retrieved successfully",
    )))
}
