use db::models::{course, enrollment, user};
use serde::Serialize;

use crate::routes::common::LecturerInfo;

/// Full course details embedded in a single enrollment.
#[derive(Debug, Serialize)]
pub struct EnrolledCourseDetail {
    pub course_name: String,
    pub course_description: String,
    pub course_instructor: String,
    pub course_capacity: i32,
    pub course_location: String,
    pub start_date: String,
    pub end_date: String,
    pub lecturer_info: LecturerInfo,
}

#[derive(Debug, Serialize)]
pub struct EnrollmentResponse {
    pub enrollment_id: i64,
    pub enrollment_message: String,
    pub course_info: EnrolledCourseDetail,
}

impl EnrollmentResponse {
    pub fn new(enrollment: enrollment::Model, course: course::Model, owner: user::Model) -> Self {
        Self {
            enrollment_id: enrollment.id,
            enrollment_message: enrollment.message,
            course_info: EnrolledCourseDetail {
                course_name: course.name,
                course_description: course.description,
                course_instructor: course.instructor,
                course_capacity: course.capacity,
                course_location: course.location,
                start_date: course.start_date,
                end_date: course.end_date,
                lecturer_info: LecturerInfo::from(&owner),
            },
        }
    }
}

/// Condensed course details used in the enrollment listing.
#[derive(Debug, Serialize)]
pub struct EnrolledCourseSummary {
    pub course_name: String,
    pub course_instructor: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Serialize)]
pub struct EnrollmentListItem {
    pub enrollment_id: i64,
    pub course_info: EnrolledCourseSummary,
}

impl From<(enrollment::Model, course::Model)> for EnrollmentListItem {
    fn from((enrollment, course): (enrollment::Model, course::Model)) -> Self {
        Self {
            enrollment_id: enrollment.id,
            course_info: EnrolledCourseSummary {
                course_name: course.name,
                course_instructor: course.instructor,
                start_date: course.start_date,
                end_date: course.end_date,
            },
        }
    }
}

pub fn enrollment_not_found(enrollment_id: i64) -> String {
    format!("Course Enrollment with ID: {enrollment_id} is not found")
}
