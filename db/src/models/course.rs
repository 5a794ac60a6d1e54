use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, IntoActiveModel, QueryOrder, Set};

use super::user;

/// Represents a course in the `courses` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Globally unique course name.
    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
    pub instructor: String,
    pub capacity: i32,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// The lecturer who created the course.
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Owner,

    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollments,

    #[sea_orm(has_many = "super::lesson::Entity")]
    Lessons,

    #[sea_orm(has_many = "super::assignment::Entity")]
    Assignments,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lessons.def()
    }
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields required to create a course.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub name: String,
    pub description: String,
    pub instructor: String,
    pub capacity: i32,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct CourseChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub instructor: Option<String>,
    pub capacity: Option<i32>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        owner_id: i64,
        new: NewCourse,
    ) -> Result<Model, DbErr> {
        let active = ActiveModel {
            id: NotSet,
            name: Set(new.name),
            description: Set(new.description),
            instructor: Set(new.instructor),
            capacity: Set(new.capacity),
            location: Set(new.location),
            start_date: Set(new.start_date),
            end_date: Set(new.end_date),
            owner_id: Set(owner_id),
            created_at: Set(Utc::now()),
        };

        active.insert(db).await
    }

    pub async fn name_exists(db: &DatabaseConnection, name: &str) -> Result<bool, DbErr> {
        let count = Entity::find()
            .filter(Column::Name.eq(name))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Fetches a course together with its owning lecturer.
    pub async fn find_with_owner(
        db: &DatabaseConnection,
        id: i64,
    ) -> Result<Option<(Model, user::Model)>, DbErr> {
        let row = Entity::find_by_id(id)
            .find_also_related(user::Entity)
            .one(db)
            .await?;

        Ok(row.and_then(super::with_parent))
    }

    /// All courses ordered by id, each paired with its owner.
    pub async fn list_with_owners(
        db: &DatabaseConnection,
    ) -> Result<Vec<(Model, user::Model)>, DbErr> {
        let rows = Entity::find()
            .find_also_related(user::Entity)
            .order_by_asc(Column::Id)
            .all(db)
            .await?;

        Ok(rows.into_iter().filter_map(super::with_parent).collect())
    }

    /// Applies the supplied fields and returns the stored row.
    pub async fn update(
        self,
        db: &DatabaseConnection,
        changes: CourseChanges,
    ) -> Result<Model, DbErr> {
        let current = self.clone();
        let mut active = self.into_active_model();

        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(instructor) = changes.instructor {
            active.instructor = Set(instructor);
        }
        if let Some(capacity) = changes.capacity {
            active.capacity = Set(capacity);
        }
        if let Some(location) = changes.location {
            active.location = Set(location);
        }
        if let Some(start_date) = changes.start_date {
            active.start_date = Set(start_date);
        }
        if let Some(end_date) = changes.end_date {
            active.end_date = Set(end_date);
        }

        if !active.is_changed() {
            return Ok(current);
        }

        active.update(db).await
    }

    /// Deletes the course; lessons, assignments and enrollments go with it.
    pub async fn delete(self, db: &DatabaseConnection) -> Result<(), DbErr> {
        Entity::delete_by_id(self.id).exec(db).await?;
        Ok(())
    }
}
