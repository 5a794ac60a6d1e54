//! # Auth Routes Module
//!
//! - `POST /login`: exchange a username and password for an access token.

use axum::{Router, routing::post};
use util::state::AppState;

pub mod post;

use post::login;

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}
