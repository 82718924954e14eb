//! Routes for the `/api/instructors` endpoint group.

use crate::state::AppState;
use axum::{Router, routing::get};
use get::list_instructors;

pub mod get;

/// Builds the `/instructors` route group.
///
/// - `GET /instructors` → `list_instructors`
pub fn instructors_routes() -> Router<AppState> {
    Router::new().route("/", get(list_instructors))
}
