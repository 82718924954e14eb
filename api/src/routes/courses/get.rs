use crate::error::ApiError;
use crate::routes::course_details::get::StudentNameResponse;
use crate::routes::instructors::get::InstructorResponse;
use crate::state::AppState;
use axum::{Json, extract::State};
use db::models::course::Model as CourseModel;
use serde::Serialize;

/// Course projection with nested instructor and name-only students.
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: i64,
    pub name: String,
    pub credits: Option<i32>,
    pub instructor: Option<InstructorResponse>,
    pub students: Vec<StudentNameResponse>,
}

/// GET /api/courses
///
/// Retrieve all courses, each with its instructor (full projection, `null`
/// when unassigned) and enrolled students (name-only projection).
///
/// ### Responses
/// - `200 OK` - JSON array of
///   `{id, name, credits, instructor, students: [{first_name, last_name}]}`
/// - `500 Internal Server Error` - Database error
pub async fn list_courses(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    let db = app_state.db();

    let courses = CourseModel::list(db).await?;
    let mut out = Vec::with_capacity(courses.len());

    for course in courses {
        let instructor = course.instructor(db).await?.map(InstructorResponse::from);
        let students = course
            .students(db)
            .await?
            .into_iter()
            .map(StudentNameResponse::from)
            .collect();

        out.push(CourseResponse {
            id: course.id,
            name: course.name,
            credits: course.credits,
            instructor,
            students,
        });
    }

    Ok(Json(out))
}
