//! Routes for the `/api/courses` endpoint group.

use crate::state::AppState;
use axum::{Router, routing::get};
use get::list_courses;

pub mod get;

/// Builds the `/courses` route group.
///
/// - `GET /courses` → `list_courses`
pub fn courses_routes() -> Router<AppState> {
    Router::new().route("/", get(list_courses))
}
