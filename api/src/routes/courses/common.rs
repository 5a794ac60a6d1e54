use db::models::{
    course::{self, CourseChanges, NewCourse},
    user,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::routes::common::LecturerInfo;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, message = "Course name is required"))]
    pub course_name: String,
    pub course_description: String,
    pub course_instructor: String,
    #[validate(range(min = 0, message = "Course capacity cannot be negative"))]
    pub course_capacity: i32,
    pub course_location: String,
    pub start_date: String,
    pub end_date: String,
}

impl From<CreateCourseRequest> for NewCourse {
    fn from(req: CreateCourseRequest) -> Self {
        Self {
            name: req.course_name,
            description: req.course_description,
            instructor: req.course_instructor,
            capacity: req.course_capacity,
            location: req.course_location,
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

/// Every field is optional; omitted fields keep their stored value.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, message = "Course name cannot be empty"))]
    pub course_name: Option<String>,
    pub course_description: Option<String>,
    pub course_instructor: Option<String>,
    #[validate(range(min = 0, message = "Course capacity cannot be negative"))]
    pub course_capacity: Option<i32>,
    pub course_location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl From<UpdateCourseRequest> for CourseChanges {
    fn from(req: UpdateCourseRequest) -> Self {
        Self {
            name: req.course_name,
            description: req.course_description,
            instructor: req.course_instructor,
            capacity: req.course_capacity,
            location: req.course_location,
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub course_id: i64,
    pub course_name: String,
    pub course_description: String,
    pub course_instructor: String,
    pub course_capacity: i32,
    pub course_location: String,
    pub start_date: String,
    pub end_date: String,
    pub created_at: String,
    pub lecturer_info: LecturerInfo,
}

impl From<(course::Model, user::Model)> for CourseResponse {
    fn from((course, owner): (course::Model, user::Model)) -> Self {
        Self {
            course_id: course.id,
            course_name: course.name,
            course_description: course.description,
            course_instructor: course.instructor,
            course_capacity: course.capacity,
            course_location: course.location,
            start_date: course.start_date,
            end_date: course.end_date,
            created_at: course.created_at.to_rfc3339(),
            lecturer_info: LecturerInfo::from(&owner),
        }
    }
}

pub fn course_not_found(course_id: i64) -> String {
    format!("Course with ID: {course_id} not found")
}

pub fn duplicate_course(name: &str) -> String {
    format!("{name} is already added")
}
