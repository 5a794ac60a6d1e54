pub mod assignment;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod user;

pub use assignment::Entity as Assignment;
pub use course::Entity as Course;
pub use enrollment::Entity as Enrollment;
pub use lesson::Entity as Lesson;
pub use user::Entity as User;

/// Flattens a `find_also_related` row. Foreign keys are non-null, so a
/// missing parent only happens on a broken row, which is skipped.
pub(crate) fn with_parent<A, B>((child, parent): (A, Option<B>)) -> Option<(A, B)> {
    parent.map(|parent| (child, parent))
}
