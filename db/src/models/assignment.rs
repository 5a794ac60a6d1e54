use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{FromJsonQueryResult, IntoActiveModel, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use super::course;

/// Represents an assignment in the `assignments` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub title: String,
    #[sea_orm(unique, column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Json")]
    pub questions: Questions,
    #[sea_orm(column_type = "Text")]
    pub instruction: String,
    pub due_date: String,
    pub max_score: i32,
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

/// Question prompts in display order, stored as a JSON array of strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct Questions(pub Vec<String>);

#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub title: String,
    pub description: String,
    pub questions: Vec<String>,
    pub instruction: String,
    pub due_date: String,
    pub max_score: i32,
}

#[derive(Debug, Clone, Default)]
pub struct AssignmentChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub questions: Option<Vec<String>>,
    pub instruction: Option<String>,
    pub due_date: Option<String>,
    pub max_score: Option<i32>,
}

impl AssignmentChanges {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.questions.is_none()
            && self.instruction.is_none()
            && self.due_date.is_none()
            && self.max_score.is_none()
    }
}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        author_id: i64,
        course_id: i64,
        new: NewAssignment,
    ) -> Result<Model, DbErr> {
        let active = ActiveModel {
            title: Set(new.title),
            description: Set(new.description),
            questions: Set(Questions(new.questions)),
            instruction: Set(new.instruction),
            due_date: Set(new.due_date),
            max_score: Set(new.max_score),
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

    pub async fn description_exists(
        db: &DatabaseConnection,
        description: &str,
    ) -> Result<bool, DbErr> {
        let count = Entity::find()
            .filter(Column::Description.eq(description))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn find_in_course(
        db: &DatabaseConnection,
        course_id: i64,
        assignment_id: i64,
    ) -> Result<Option<(Model, course::Model)>, DbErr> {
        let row = Entity::find_by_id(assignment_id)
            .filter(Column::CourseId.eq(course_id))
            .find_also_related(course::Entity)
            .one(db)
            .await?;

        Ok(row.and_then(super::with_parent))
    }

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
        changes: AssignmentChanges,
    ) -> Result<Model, DbErr> {
        if changes.is_empty() {
            return Ok(self);
        }

        let mut active = self.into_active_model();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(questions) = changes.questions {
            active.questions = Set(Questions(questions));
        }
        if let Some(instruction) = changes.instruction {
            active.instruction = Set(instruction);
        }
        if let Some(due_date) = changes.due_date {
            active.due_date = Set(due_date);
        }
        if let Some(max_score) = changes.max_score {
            active.max_score = Set(max_score);
        }

        active.update(db).await
    }

    pub async fn delete(self, db: &DatabaseConnection) -> Result<(), DbErr> {
        Entity::delete_by_id(self.id).exec(db).await?;
        Ok(())
    }
}
