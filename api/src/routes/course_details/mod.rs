//! Routes for the `/api/course_details` endpoint group.

use crate::state::AppState;
use axum::{Router, routing::get};
use get::get_course_detail;

pub mod get;

/// Builds the `/course_details` route group.
///
/// - `GET /course_details/{course_id}` → `get_course_detail`
pub fn course_details_routes() -> Router<AppState> {
    Router::new().route("/{course_id}", get(get_course_detail))
}
