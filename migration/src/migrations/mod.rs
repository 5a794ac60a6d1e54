pub mod m202309250001_create_users;
pub mod m202309250002_create_courses;
pub mod m202309250003_create_enrollments;
pub mod m202309250004_create_lessons;
pub mod m202309250005_create_assignments;
