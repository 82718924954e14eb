use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
};
use db::models::student::{Model as StudentModel, SortKey};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Deserialize)]
pub struct ListStudentsQuery {
    pub order: Option<String>,
}

/// Full student projection, used by the student listing.
#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub year: Option<i32>,
    pub gpa: Option<f64>,
}

impl From<StudentModel> for StudentResponse {
    fn from(student: StudentModel) -> Self {
        Self {
            id: student.id,
            first_name: student.first_name,
            last_name: student.last_name,
            year: student.year,
            gpa: student.gpa,
        }
    }
}

/// GET /api/students
///
/// Retrieve all students, optionally ordered by a single sort key.
///
/// ### Query Parameters
/// - `order` (optional): One of `first_name`, `last_name`, `year`, `gpa`.
///   `gpa` sorts descending; every other key sorts ascending. Omitted (or
///   empty) leaves the ordering to the store.
///
/// ### Examples
/// ```http
/// GET /api/students
/// GET /api/students?order=gpa
/// GET /api/students?order=last_name
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// [
///   {
///     "id": 1,
///     "first_name": "Ada",
///     "last_name": "Lovelace",
///     "year": 2,
///     "gpa": 3.9
///   }
/// ]
/// ```
///
/// - `400 Bad Request` - `order` is not a recognized sort key
/// - `500 Internal Server Error` - Database error
pub async fn list_students(
    State(app_state): State<AppState>,
    Query(query): Query<ListStudentsQuery>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let order = match query.order.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(
            SortKey::from_str(raw).map_err(|_| ApiError::InvalidSortKey(raw.to_string()))?,
        ),
    };

    let students = StudentModel::list(app_state.db(), order).await?;

    Ok(Json(
        students.into_iter().map(StudentResponse::from).collect(),
    ))
}
