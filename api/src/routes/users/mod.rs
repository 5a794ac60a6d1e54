//! # Users Routes Module
//!
//! - `POST /users` registers a user (no authentication).
//! - `GET /users` lists every user (no authentication).

use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

use get::list_users;
use post::create_user;

pub fn users_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/", get(list_users))
}
