use db::models::{
    assignment::{self, AssignmentChanges, NewAssignment},
    course,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::routes::common::CourseSummary;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAssignmentRequest {
    #[validate(length(min = 1, message = "Assignment title is required"))]
    pub assignment_title: String,
    #[validate(length(min = 1, message = "Assignment description is required"))]
    pub assignment_description: String,
    pub assignment_questions: Vec<String>,
    pub assignment_instruction: String,
    #[validate(range(min = 0, message = "Max score cannot be negative"))]
    pub max_score: i32,
    pub due_date: String,
}

impl From<CreateAssignmentRequest> for NewAssignment {
    fn from(req: CreateAssignmentRequest) -> Self {
        Self {
            title: req.assignment_title,
            description: req.assignment_description,
            questions: req.assignment_questions,
            instruction: req.assignment_instruction,
            due_date: req.due_date,
            max_score: req.max_score,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateAssignmentRequest {
    #[validate(length(min = 1, message = "Assignment title cannot be empty"))]
    pub assignment_title: Option<String>,
    #[validate(length(min = 1, message = "Assignment description cannot be empty"))]
    pub assignment_description: Option<String>,
    pub assignment_questions: Option<Vec<String>>,
    pub assignment_instruction: Option<String>,
    pub due_date: Option<String>,
    #[validate(range(min = 0, message = "Max score cannot be negative"))]
    pub max_score: Option<i32>,
}

impl From<UpdateAssignmentRequest> for AssignmentChanges {
    fn from(req: UpdateAssignmentRequest) -> Self {
        Self {
            title: req.assignment_title,
            description: req.assignment_description,
            questions: req.assignment_questions,
            instruction: req.assignment_instruction,
            due_date: req.due_date,
            max_score: req.max_score,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub assignment_id: i64,
    pub assignment_title: String,
    pub assignment_description: String,
    pub assignment_questions: Vec<String>,
    pub assignment_instruction: String,
    pub max_score: i32,
    pub due_date: String,
    pub course_info: CourseSummary,
    pub created_at: String,
}

impl From<(assignment::Model, course::Model)> for AssignmentResponse {
    fn from((assignment, course): (assignment::Model, course::Model)) -> Self {
        Self {
            assignment_id: assignment.id,
            assignment_questions: assignment.questions.0,
            assignment_title: assignment.title,
            assignment_description: assignment.description,
            assignment_instruction: assignment.instruction,
            max_score: assignment.max_score,
            due_date: assignment.due_date,
            course_info: CourseSummary::from(&course),
            created_at: assignment.created_at.to_rfc3339(),
        }
    }
}

pub const ASSIGNMENT_NOT_FOUND: &str = "Assignment not found";
pub const DUPLICATE_ASSIGNMENT: &str = "An assignment with this title or description already exists";
