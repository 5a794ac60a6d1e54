use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use db::models::{course, enrollment};
use util::state::AppState;

use super::common::{CourseResponse, CreateCourseRequest, duplicate_course};
use crate::auth::{AuthUser, policy};
use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;
use crate::routes::common::validate;
use crate::routes::my_courses::common::EnrollmentResponse;

/// POST /courses
///
/// Creates a course owned by the caller.
///
/// ### Request Body
/// ```json
/// {
///   "course_name": "COS 301",
///   "course_description": "Software engineering",
///   "course_instructor": "Dr. Okafor",
///   "course_capacity": 120,
///   "course_location": "IT 4-1",
///   "start_date": "2025-02-01",
///   "end_date": "2025-06-01"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with the course view
/// - `403 Forbidden` when the name is taken (checked first) or the caller is not a lecturer
pub async fn create_course(
    State(app_state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Json(req): Json<CreateCourseRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<CourseResponse>>)> {
    validate(&req)?;
    let db = app_state.db();

    if course::Model::name_exists(db, &req.course_name).await? {
        return Err(ApiError::Forbidden(duplicate_course(&req.course_name)));
    }

    if !policy::can_create_course(&caller) {
        return Err(ApiError::Forbidden(
            "Only lecturers are allowed to add new courses".into(),
        ));
    }

    let name = req.course_name.clone();
    let created = course::Model::create(db, caller.id, req.into())
        .await
        .map_err(|e| ApiError::unique_violation_or(e, ApiError::Forbidden(duplicate_course(&name))))?;

    tracing::info!(course_id = created.id, owner = %caller.username, "course created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            (created, caller).into(),
            "Course created successfully",
        )),
    ))
}

/// POST /courses/{course_id}/enroll
///
/// Enrolls the caller in the course.
///
/// ### Responses
/// - `200 OK` with the enrollment view
/// - `403 Forbidden` when the course does not exist or the caller already
///   holds an enrollment in a course with the same name
pub async fn enroll(
    State(app_state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(course_id): Path<i64>,
) -> ApiResult<Json<ApiResponse<EnrollmentResponse>>> {
    let db = app_state.db();

    let (course, owner) = course::Model::find_with_owner(db, course_id)
        .await?
        .ok_or_else(|| ApiError::Forbidden(format!("Course with ID: {course_id} is not found")))?;

    if enrollment::Model::is_enrolled_in_course_named(db, caller.id, &course.name).await? {
        return Err(ApiError::Forbidden(
            "You've already enrolled in this course.".into(),
        ));
    }

    let created = enrollment::Model::create(db, caller.id, course.id).await?;

    tracing::info!(enrollment_id = created.id, course_id, student = %caller.username, "student enrolled");

    Ok(Json(ApiResponse::success(
        EnrollmentResponse::new(created, course, owner),
        "Enrolled successfully",
    )))
}
