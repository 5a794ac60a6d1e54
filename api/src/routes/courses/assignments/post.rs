use axum::{
    Extension, Json,
    extract::{Path, State},
};
use db::models::{assignment, course};
use util::state::AppState;

use super::common::{AssignmentResponse, CreateAssignmentRequest, DUPLICATE_ASSIGNMENT};
use crate::auth::{AuthUser, policy};
use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;
use crate::routes::common::validate;

/// POST /courses/{course_id}/assignments
///
/// ### Request Body
/// ```json
/// {
///   "assignment_title": "Graphs",
///   "assignment_description": "Shortest paths",
///   "assignment_questions": ["Define a heap", "Prove Dijkstra"],
///   "assignment_instruction": "Submit a PDF",
///   "max_score": 100,
///   "due_date": "2025-03-15"
/// }
/// ```
///
/// ### Responses
/// - `200 OK` with the assignment view
/// - `403 Forbidden`, in check order: course missing, caller is not staff or
///   not the course owner, title taken, description taken
pub async fn create_assignment(
    State(app_state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(course_id): Path<i64>,
    Json(req): Json<CreateAssignmentRequest>,
) -> ApiResult<Json<ApiResponse<AssignmentResponse>>> {
    validate(&req)?;
    let db = app_state.db();

    let (course, owner) = course::Model::find_with_owner(db, course_id)
        .await?
        .ok_or_else(|| ApiError::Forbidden(format!("Course with ID: {course_id} is not found")))?;

    if !policy::can_author_in_course(&caller, &owner) {
        return Err(ApiError::Forbidden(format!(
            "You don't have permission to add a new assignment to the '{}' course",
            course.name
        )));
    }

    if assignment::Model::title_exists(db, &req.assignment_title).await? {
        return Err(ApiError::Forbidden(format!(
            "A Course Assignment with the title '{}' already exists",
            req.assignment_title
        )));
    }

    if assignment::Model::description_exists(db, &req.assignment_description).await? {
        return Err(ApiError::Forbidden(
            "An assignment with this description has already been added.".into(),
        ));
    }

    let created = assignment::Model::create(db, caller.id, course.id, req.into())
        .await
        .map_err(|e| {
            ApiError::unique_violation_or(e, ApiError::Forbidden(DUPLICATE_ASSIGNMENT.into()))
        })?;

    tracing::info!(assignment_id = created.id, course_id, author = %caller.username, "assignment created");

    Ok(Json(ApiResponse::success(
        (created, course).into(),
        "Assignment created successfully",
    )))
}
