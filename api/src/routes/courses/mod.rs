//! # Courses Routes Module
//!
//! Routes nested under `/courses`:
//! - `POST /courses` (auth), `GET /courses`, `GET /courses/{course_id}`
//! - `PUT /courses/{course_id}` (auth), `DELETE /courses/{course_id}` (auth)
//! - `POST /courses/{course_id}/enroll` (auth)
//! - `/courses/{course_id}/lessons/...` and `/courses/{course_id}/assignments/...`
//!
//! Authenticated routes carry the `allow_authenticated` guard as a route layer;
//! the others are public.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use util::state::AppState;

use crate::auth::guards::allow_authenticated;

pub mod assignments;
pub mod common;
pub mod delete;
pub mod get;
pub mod lessons;
pub mod post;
pub mod put;

use assignments::assignment_routes;
use delete::delete_course;
use get::{get_course, list_courses};
use lessons::lesson_routes;
use post::{create_course, enroll};
use put::update_course;

pub fn courses_routes(app_state: AppState) -> Router<AppState> {
    let auth = from_fn_with_state(app_state.clone(), allow_authenticated);

    Router::new()
        .route("/", post(create_course).route_layer(auth.clone()))
        .route("/", get(list_courses))
        .route("/{course_id}", get(get_course))
        .route("/{course_id}", put(update_course).route_layer(auth.clone()))
        .route("/{course_id}", delete(delete_course).route_layer(auth.clone()))
        .route("/{course_id}/enroll", post(enroll).route_layer(auth))
        .nest("/{course_id}/lessons", lesson_routes(app_state.clone()))
        .nest("/{course_id}/assignments", assignment_routes(app_state))
}
