use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{JoinType, QueryOrder, QuerySelect, Set};

use super::{course, user};

/// Message stored on every new enrollment.
pub const DEFAULT_MESSAGE: &str = "Enrollment successful✅🎉";

/// A student's enrollment in a course (`enrollments` table).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub message: String,
    pub student_id: i64,
    pub course_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::StudentId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Student,

    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        student_id: i64,
        course_id: i64,
    ) -> Result<Model, DbErr> {
        let active = ActiveModel {
            message: Set(DEFAULT_MESSAGE.to_string()),
            student_id: Set(student_id),
            course_id: Set(course_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        active.insert(db).await
    }

    /// Whether the student already holds an enrollment in a course with this name.
    pub async fn is_enrolled_in_course_named(
        db: &DatabaseConnection,
        student_id: i64,
        course_name: &str,
    ) -> Result<bool, DbErr> {
        let count = Entity::find()
            .join(JoinType::InnerJoin, Relation::Course.def())
            .filter(Column::StudentId.eq(student_id))
            .filter(course::Column::Name.eq(course_name))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// The student's enrollments, oldest first, each with its course.
    pub async fn list_for_student_with_courses(
        db: &DatabaseConnection,
        student_id: i64,
    ) -> Result<Vec<(Model, course::Model)>, DbErr> {
        let rows = Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .find_also_related(course::Entity)
            .order_by_asc(Column::Id)
            .all(db)
            .await?;

        Ok(rows.into_iter().filter_map(super::with_parent).collect())
    }

    /// Resolves the enrolled course and its owning lecturer.
    pub async fn course_with_owner(
        &self,
        db: &DatabaseConnection,
    ) -> Result<Option<(course::Model, user::Model)>, DbErr> {
        course::Model::find_with_owner(db, self.course_id).await
    }

    pub async fn delete(self, db: &DatabaseConnection) -> Result<(), DbErr> {
        Entity::delete_by_id(self.id).exec(db).await?;
        Ok(())
    }

    /// Removes every enrollment the student holds. Returns the number removed.
    pub async fn delete_all_for_student(
        db: &DatabaseConnection,
        student_id: i64,
    ) -> Result<u64, DbErr> {
        let result = Entity::delete_many()
            .filter(Column::StudentId.eq(student_id))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }
}
