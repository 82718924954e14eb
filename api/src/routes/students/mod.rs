//! Routes for the `/api/students` endpoint group.

use crate::state::AppState;
use axum::{Router, routing::get};
use get::list_students;

pub mod get;

/// Builds the `/students` route group.
///
/// - `GET /students` → `list_students`
pub fn students_routes() -> Router<AppState> {
    Router::new().route("/", get(list_students))
}
