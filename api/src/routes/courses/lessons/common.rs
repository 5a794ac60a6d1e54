use db::models::{
    course,
    lesson::{self, LessonChanges, NewLesson},
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::routes::common::CourseSummary;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateLessonRequest {
    #[validate(length(min = 1, message = "Lesson title is required"))]
    pub lesson_title: String,
    #[validate(length(min = 1, message = "Lesson content is required"))]
    pub lesson_content: String,
}

impl From<CreateLessonRequest> for NewLesson {
    fn from(req: CreateLessonRequest) -> Self {
        Self {
            title: req.lesson_title,
            content: req.lesson_content,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateLessonRequest {
    #[validate(length(min = 1, message = "Lesson title cannot be empty"))]
    pub lesson_title: Option<String>,
    #[validate(length(min = 1, message = "Lesson content cannot be empty"))]
    pub lesson_content: Option<String>,
}

impl From<UpdateLessonRequest> for LessonChanges {
    fn from(req: UpdateLessonRequest) -> Self {
        Self {
            title: req.lesson_title,
            content: req.lesson_content,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LessonResponse {
    pub lesson_id: i64,
    pub lesson_title: String,
    pub lesson_content: String,
    pub course_info: CourseSummary,
    pub created_at: String,
}

impl From<(lesson::Model, course::Model)> for LessonResponse {
    fn from((lesson, course): (lesson::Model, course::Model)) -> Self {
        Self {
            lesson_id: lesson.id,
            lesson_title: lesson.title,
            lesson_content: lesson.content,
            course_info: CourseSummary::from(&course),
            created_at: lesson.created_at.to_rfc3339(),
        }
    }
}

pub const LESSON_NOT_FOUND: &str = "Lesson not found";
