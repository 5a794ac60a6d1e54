use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;

use get::list_all_lessons;

/// `GET /lessons`: every lesson on the platform, public.
pub fn lessons_routes() -> Router<AppState> {
    Router::new().route("/", get(list_all_lessons))
}
