use axum::{
    Json,
    extract::{Path, State},
};
use db::models::course;
use util::state::AppState;

use super::common::{CourseResponse, course_not_found};
use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;

/// GET /courses
///
/// Lists every course with its lecturer, ordered by id.
pub async fn list_courses(
    State(app_state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<CourseResponse>>>> {
    let courses = course::Model::list_with_owners(app_state.db()).await?;

    Ok(Json(ApiResponse::success(
        courses.into_iter().map(CourseResponse::from).collect(),
        "Courses retrieved successfully",
    )))
}

/// GET /courses/{course_id}
///
/// ### Responses
/// - `200 OK` with the course and its lecturer
/// - `403 Forbidden` when the course does not exist
pub async fn get_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> ApiResult<Json<ApiResponse<CourseResponse>>> {
    let found = course::Model::find_with_owner(app_state.db(), course_id)
        .await?
        .ok_or_else(|| ApiError::Forbidden(course_not_found(course_id)))?;

    Ok(Json(ApiResponse::success(
        found.into(),
        "Course retrieved successfully",
    )))
}
