use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use db::models::course::Model as CourseModel;
use db::models::student::Model as StudentModel;
use serde::Serialize;

/// Denormalized course view joining course, instructor and enrolled students.
#[derive(Debug, Serialize)]
pub struct CourseDetailResponse {
    pub name: String,
    pub instructor_name: String,
    pub student_info: StudentInfo,
}

#[derive(Debug, Serialize)]
pub struct StudentInfo {
    pub number_of_students: usize,
    pub students: Vec<StudentNameResponse>,
}

/// Name-only student projection, used inside nested student lists.
#[derive(Debug, Serialize)]
pub struct StudentNameResponse {
    pub first_name: String,
    pub last_name: String,
}

impl From<StudentModel> for StudentNameResponse {
    fn from(student: StudentModel) -> Self {
        Self {
            first_name: student.first_name,
            last_name: student.last_name,
        }
    }
}

/// GET /api/course_details/{course_id}
///
/// Retrieve an aggregated view of a single course: its name, the full name
/// of its instructor, and the set of enrolled students.
///
/// ### Path Parameter
/// - `course_id` (integer): The ID of the course to retrieve.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "name": "CS101",
///   "instructor_name": "Ada Lovelace",
///   "student_info": {
///     "number_of_students": 2,
///     "students": [
///       { "first_name": "Grace", "last_name": "Hopper" },
///       { "first_name": "Alan", "last_name": "Turing" }
///     ]
///   }
/// }
/// ```
///
/// A course with no instructor assigned returns `"instructor_name": ""`.
///
/// - `404 Not Found`
/// ```json
/// {
///   "success": false,
///   "message": "Course not found"
/// }
/// ```
pub async fn get_course_detail(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> Result<Json<CourseDetailResponse>, ApiError> {
    let db = app_state.db();

    let course = CourseModel::get_by_id(db, course_id)
        .await?
        .ok_or(ApiError::NotFound("Course"))?;

    let instructor_name = match course.instructor(db).await? {
        Some(instructor) => format!("{} {}", instructor.first_name, instructor.last_name),
        None => String::new(),
    };

    let students = course.students(db).await?;

    Ok(Json(CourseDetailResponse {
        name: course.name,
        instructor_name,
        student_info: StudentInfo {
            number_of_students: students.len(),
            students: students
                .into_iter()
                .map(StudentNameResponse::from)
                .collect(),
        },
    }))
}
