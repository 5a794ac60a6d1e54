//! # Course Lessons Routes
//!
//! Nested under `/courses/{course_id}/lessons`:
//! - `POST /` (auth), `GET /`
//! - `GET /{lesson_id}`, `PUT /{lesson_id}` (auth), `DELETE /{lesson_id}` (auth)

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use util::state::AppState;

use crate::auth::guards::allow_authenticated;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_lesson;
use get::{get_lesson, list_lessons};
use post::create_lesson;
use put::update_lesson;

pub fn lesson_routes(app_state: AppState) -> Router<AppState> {
    let auth = from_fn_with_state(app_state, allow_authenticated);

    Router::new()
        .route("/", post(create_lesson).route_layer(auth.clone()))
        .route("/", get(list_lessons))
        .route("/{lesson_id}", get(get_lesson))
        .route("/{lesson_id}", put(update_lesson).route_layer(auth.clone()))
        .route("/{lesson_id}", delete(delete_lesson).route_layer(auth))
}
