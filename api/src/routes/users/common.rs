use db::models::user::{self, Role};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    pub role: Role,
}

/// Public view of a user. The password hash is never exposed.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub created_at: String,
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}
