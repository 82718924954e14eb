//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Health check endpoint
//! - `/students` → Sortable student listing
//! - `/course_details` → Aggregated course detail view
//! - `/instructors` → Instructor listing
//! - `/courses` → Course listing with nested instructor and students

use crate::routes::{
    course_details::course_details_routes, courses::courses_routes, health::health_routes,
    instructors::instructors_routes, students::students_routes,
};
use crate::state::AppState;
use axum::Router;

pub mod course_details;
pub mod courses;
pub mod health;
pub mod instructors;
pub mod students;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router has `AppState` as its state type and mounts all
/// route groups under their respective base paths. All endpoints are
/// read-only and unauthenticated.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/health", health_routes())
        .nest("/students", students_routes())
        .nest("/course_details", course_details_routes())
        .nest("/instructors", instructors_routes())
        .nest("/courses", courses_routes())
}
