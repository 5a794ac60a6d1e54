//! HTTP route entry point.
//!
//! Route groups are mounted at the root, each with its own access rules:
//! - `/` and `/health` (public)
//! - `/login` (public)
//! - `/users` (public registration and listing)
//! - `/courses` with nested `/lessons` and `/assignments` (mixed; writes need a token)
//! - `/my-courses` (authenticated)
//! - `/lessons`, `/assignments` (public global listings)

use crate::routes::{
    assignments::assignments_routes, auth::auth_routes, courses::courses_routes,
    health::{banner, health_routes},
    lessons::lessons_routes, my_courses::my_courses_routes, users::users_routes,
};
use axum::{Router, routing::get};
use util::state::AppState;

pub mod assignments;
pub mod auth;
pub mod common;
pub mod courses;
pub mod health;
pub mod lessons;
pub mod my_courses;
pub mod users;

/// Builds the complete application router with `app_state` applied.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(banner))
        .nest("/health", health_routes())
        .merge(auth_routes())
        .nest("/users", users_routes())
        .nest("/courses", courses_routes(app_state.clone()))
        .nest("/my-courses", my_courses_routes(app_state.clone()))
        .nest("/lessons", lessons_routes())
        .nest("/assignments", assignments_routes())
        .with_state(app_state)
}
