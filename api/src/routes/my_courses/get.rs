use axum::{
    Extension, Json,
    extract::{Path, State},
};
use db::models::enrollment;
use util::state::AppState;

use super::common::{EnrollmentListItem, EnrollmentResponse, enrollment_not_found};
use crate::auth::{AuthUser, policy};
use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;

/// GET /my-courses
///
/// The caller's enrollments ordered by id; empty when there are none.
pub async fn list_enrollments(
    State(app_state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
) -> ApiResult<Json<ApiResponse<Vec<EnrollmentListItem>>>> {
    let rows = enrollment::Model::list_for_student_with_courses(app_state.db(), caller.id).await?;

    Ok(Json(ApiResponse::success(
        rows.into_iter().map(EnrollmentListItem::from).collect(),
        "Enrollments retrieved successfully",
    )))
}

/// GET /my-courses/{enrollment_id}
///
/// `403 Forbidden` when the enrollment does not exist or belongs to someone else.
pub async fn get_enrollment(
    State(app_state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(enrollment_id): Path<i64>,
) -> ApiResult<Json<ApiResponse<EnrollmentResponse>>> {
    let db = app_state.db();

    let found = enrollment::Model::find_by_id(db, enrollment_id)
        .await?
        .ok_or_else(|| ApiError::Forbidden(enrollment_not_found(enrollment_id)))?;

    if !policy::owns_enrollment(&caller, &found) {
        return Err(ApiError::Forbidden(
            "Your view of courses is limited to those that you have enrolled in".into(),
        ));
    }

    let (course, owner) = found
        .course_with_owner(db)
        .await?
        .ok_or_else(|| ApiError::Forbidden(enrollment_not_found(enrollment_id)))?;

    Ok(Json(ApiResponse::success(
        EnrollmentResponse::new(found, course, owner),
        "Enrollment retrieved successfully",
    )))
}
