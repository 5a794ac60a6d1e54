//! Role and ownership rules applied by the mutating endpoints.
//!
//! Creating a lesson or assignment compares the caller's *username* with the
//! course owner's, while updating or deleting one compares the caller's *id*
//! with the resource's author. Both rules are kept as they are.

use db::models::{
    course, enrollment,
    user::{self, Role},
};

/// Only lecturers may create courses.
pub fn can_create_course(caller: &user::Model) -> bool {
    caller.role == Role::Lecturer
}

/// Course owner or any admin may update or delete a course.
pub fn can_manage_course(caller: &user::Model, course: &course::Model) -> bool {
    caller.id == course.owner_id || caller.role == Role::Admin
}

fn is_staff(caller: &user::Model) -> bool {
    matches!(caller.role, Role::Lecturer | Role::Admin)
}

/// Lessons and assignments are added by staff whose username matches the
/// course owner's.
pub fn can_author_in_course(caller: &user::Model, course_owner: &user::Model) -> bool {
    is_staff(caller) && caller.username == course_owner.username
}

/// Lessons and assignments are changed by staff who authored them.
pub fn can_modify_authored(caller: &user::Model, author_id: i64) -> bool {
    is_staff(caller) && caller.id == author_id
}

pub fn owns_enrollment(caller: &user::Model, enrollment: &enrollment::Model) -> bool {
    caller.id == enrollment.student_id
}
