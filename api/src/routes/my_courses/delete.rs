use axum::{
    Extension,
    extract::{Path, State},
    http::StatusCode,
};
use db::models::enrollment;
use util::state::AppState;

use super::common::enrollment_not_found;
use crate::auth::{AuthUser, policy};
use crate::error::{ApiError, ApiResult};

/// DELETE /my-courses
///
/// Drops every enrollment the caller holds. Always `204 No Content`.
pub async fn delete_all_enrollments(
    State(app_state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
) -> ApiResult<StatusCode> {
    let removed = enrollment::Model::delete_all_for_student(app_state.db(), caller.id).await?;
    tracing::info!(student = %caller.username, removed, "enrollments cleared");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /my-courses/{enrollment_id}
///
/// ### Responses
/// - `204 No Content`
/// - `403 Forbidden` when the enrollment does not exist or belongs to someone else
pub async fn delete_enrollment(
    State(app_state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(enrollment_id): Path<i64>,
) -> ApiResult<StatusCode> {
    let db = app_state.db();

    let found = enrollment::Model::find_by_id(db, enrollment_id)
        .await?
        .ok_or_else(|| ApiError::Forbidden(enrollment_not_found(enrollment_id)))?;

    if !policy::owns_enrollment(&caller, &found) {
        return Err(ApiError::Forbidden(
            "You don't have permission to delete this enrollment data".into(),
        ));
    }

    found.delete(db).await?;

    Ok(StatusCode::NO_CONTENT)
}
