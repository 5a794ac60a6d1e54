//! Views and helpers shared by several route groups.

use db::models::{course, user};
use serde::Serialize;
use validator::ValidationErrors;

use crate::error::ApiError;

/// Joins the messages of every failed field into one line.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Runs `validator` checks and turns failures into a 400.
pub fn validate<T: validator::Validate>(req: &T) -> Result<(), ApiError> {
    req.validate()
        .map_err(|e| ApiError::BadRequest(format_validation_errors(&e)))
}

#[derive(Debug, Serialize)]
pub struct LecturerInfo {
    pub username: String,
    pub email: String,
}

impl From<&user::Model> for LecturerInfo {
    fn from(user: &user::Model) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

/// The parent course as embedded in lesson and assignment views.
#[derive(Debug, Serialize)]
pub struct CourseSummary {
    pub course_id: i64,
    pub course_name: String,
    pub course_description: String,
}

impl From<&course::Model> for CourseSummary {
    fn from(course: &course::Model) -> Self {
        Self {
            course_id: course.id,
            course_name: course.name.clone(),
            course_description: course.description.clone(),
        }
    }
}
