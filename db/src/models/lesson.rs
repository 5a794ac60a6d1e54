use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{IntoActiveModel, QueryOrder, Set};

use super::course;

/// A lesson published inside a course (`lessons` table).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lessons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub title: String,
    #[sea_orm(unique, column_type = "Text")]
    pub content: String,
    pub author_id: i64,
    pub course_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Author,

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
        Relation::Author.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone)]
pub struct NewLesson {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default)]
pub struct LessonChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        author_id: i64,
        course_id: i64,
        new: NewLesson,
    ) -> Result<Model, DbErr> {
        let active = ActiveModel {
            title: Set(new.title),
            content: Set(new.content),
            author_id: Set(author_id),
            course_id: Set(course_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        active.insert(db).await
    }

    pub async fn title_exists(db: &DatabaseConnection, title: &str) -> Result<bool, DbErr> {
        let count = Entity::find()
            .filter(Column::Title.eq(title))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    pub async fn content_exists(db: &DatabaseConnection, content: &str) -> Result<bool, DbErr> {
        let count = Entity::find()
            .filter(Column::Content.eq(content))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Fetches the lesson only if it belongs to `course_id`.
    pub async fn find_in_course(
        db: &DatabaseConnection,
        course_id: i64,
        lesson_id: i64,
    ) -> Result<Option<(Model, course::Model)>, DbErr> {
        let row = Entity::find_by_id(lesson_id)
            .filter(Column::CourseId.eq(course_id))
            .find_also_related(course::Entity)
            .one(db)
            .await?;

        Ok(row.and_then(super::with_parent))
    }

    /// Lessons of one course, ordered by id.
    pub async fn list_for_course(
        db: &DatabaseConnection,
        course_id: i64,
    ) -> Result<Vec<(Model, course::Model)>, DbErr> {
        let rows = Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .find_also_related(course::Entity)
            .order_by_asc(Column::Id)
            .all(db)
            .await?;

        Ok(rows.into_iter().filter_map(super::with_parent).collect())
    }

    /// Every lesson on the platform, ordered by id.
    pub async fn list_all_with_courses(
        db: &DatabaseConnection,
    ) -> Result<Vec<(Model, course::Model)>, DbErr> {
        let rows = Entity::find()
            .find_also_related(course::Entity)
            .order_by_asc(Column::Id)
            .all(db)
            .await?;

        Ok(rows.into_iter().filter_map(super::with_parent).collect())
    }

    pub async fn update(
        self,
        db: &DatabaseConnection,
        changes: LessonChanges,
    ) -> Result<Model, DbErr> {
        if changes.title.is_none() && changes.content.is_none() {
            return Ok(self);
        }

        let mut active = self.into_active_model();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(content) = changes.content {
            active.content = Set(content);
        }

        active.update(db).await
    }

    pub async fn delete(self, db: &DatabaseConnection) -> Result<(), DbErr> {
        Entity::delete_by_id(self.id).exec(db).await?;
        Ok(())
    }
}
