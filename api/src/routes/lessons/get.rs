use axum::{Json, extract::State};
use db::models::lesson;
use util::state::AppState;

use crate::error::ApiResult;
use crate::response::ApiResponse;
use crate::routes::courses::lessons::common::LessonResponse;

/// GET /lessons
///
/// All lessons across courses, ordered by id. Empty when there are none.
pub async fn list_all_lessons(
    State(app_state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<LessonResponse>>>> {
    let lessons = lesson::Model::list_all_with_courses(app_state.db()).await?;

    Ok(Json(ApiResponse::success(
        lessons.into_iter().map(LessonResponse::from).collect(),
        "Lessons retrieved successfully",
    )))
}
