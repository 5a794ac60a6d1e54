use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Represents a user in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique login name.
    #[sea_orm(unique)]
    pub username: String,
    /// User's unique email address.
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2 PHC string. Never serialized.
    pub password_hash: String,
    pub role: Role,
    /// Timestamp when the user was created.
    pub created_at: DateTime<Utc>,
}

/// Platform-wide role of a user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    #[sea_orm(string_value = "lecturer")]
    Lecturer,

    #[sea_orm(string_value = "student")]
    Student,

    #[sea_orm(string_value = "admin")]
    Admin,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course::Entity")]
    Courses,

    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollments,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a new user, hashing the plaintext password first.
    ///
    /// Surrounding whitespace is stripped from the username, matching the
    /// lookup done by [`Model::verify_credentials`].
    pub async fn create(
        db: &DatabaseConnection,
        username: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Model, DbErr> {
        let user = ActiveModel {
            username: Set(username.trim().to_owned()),
            email: Set(email.to_owned()),
            password_hash: Set(Self::hash_password(password)?),
            role: Set(role),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        user.insert(db).await
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn find_by_username(
        db: &DatabaseConnection,
        username: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Username.eq(username))
            .one(db)
            .await
    }

    /// Returns true when another account already uses either identifier.
    pub async fn username_or_email_taken(
        db: &DatabaseConnection,
        username: &str,
        email: &str,
    ) -> Result<bool, DbErr> {
        let existing = Entity::find()
            .filter(
                Condition::any()
                    .add(Column::Username.eq(username.trim()))
                    .add(Column::Email.eq(email)),
            )
            .count(db)
            .await?;
        Ok(existing > 0)
    }

    /// All users, oldest first.
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
        Entity::find().order_by_asc(Column::Id).all(db).await
    }

    /// Looks up `username` and checks `password` against the stored hash.
    ///
    /// Returns `Ok(None)` for both an unknown username and a wrong password.
    pub async fn verify_credentials(
        db: &DatabaseConnection,
        username: &str,
        password: &str,
    ) -> Result<Option<Model>, DbErr> {
        let username = username.trim();

        if let Some(user) = Self::find_by_username(db, username).await? {
            if user.verify_password(password) {
                return Ok(Some(user));
            }
        }

        Ok(None)
    }

    pub fn hash_password(password: &str) -> Result<String, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DbErr::Custom(format!("password hashing failed: {}", e)))
    }

    pub fn verify_password(&self, password: &str) -> bool {
        let parsed = match PasswordHash::new(&self.password_hash) {
            Ok(parsed) => parsed,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}
