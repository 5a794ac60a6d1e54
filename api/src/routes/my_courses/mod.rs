//! # My Courses Routes
//!
//! The caller's enrollments, all behind the authentication guard:
//! - `GET /my-courses`, `DELETE /my-courses`
//! - `GET /my-courses/{enrollment_id}`, `DELETE /my-courses/{enrollment_id}`

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get},
};
use util::state::AppState;

use crate::auth::guards::allow_authenticated;

pub mod common;
pub mod delete;
pub mod get;

use delete::{delete_all_enrollments, delete_enrollment};
use get::{get_enrollment, list_enrollments};

pub fn my_courses_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_enrollments))
        .route("/", delete(delete_all_enrollments))
        .route("/{enrollment_id}", get(get_enrollment))
        .route("/{enrollment_id}", delete(delete_enrollment))
        .route_layer(from_fn_with_state(app_state, allow_authenticated))
}
