use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;

use get::list_all_assignments;

/// `GET /assignments`: every assignment on the platform, public.
pub fn assignments_routes() -> Router<AppState> {
    Router::new().route("/", get(list_all_assignments))
}
