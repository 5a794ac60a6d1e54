//! # Course Assignments Routes
//!
//! Nested under `/courses/{course_id}/assignments`:
//! - `POST /` (auth), `GET /` (auth)
//! - `GET /{assignment_id}`, `PUT /{assignment_id}` (auth), `DELETE /{assignment_id}` (auth)
//!
//! Unlike lessons, listing a course's assignments requires authentication.

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

use delete::delete_assignment;
use get::{get_assignment, list_assignments};
use post::create_assignment;
use put::update_assignment;

pub fn assignment_routes(app_state: AppState) -> Router<AppState> {
    let auth = from_fn_with_state(app_state, allow_authenticated);

    Router::new()
        .route("/", post(create_assignment).route_layer(auth.clone()))
        .route("/", get(list_assignments).route_layer(auth.clone()))
        .route("/{assignment_id}", get(get_assignment))
        .route("/{assignment_id}", put(update_assignment).route_layer(auth.clone()))
        .route("/{assignment_id}", delete(delete_assignment).route_layer(auth))
}
