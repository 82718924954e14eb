use crate::error::ApiError;
use crate::state::AppState;
use axum::{Json, extract::State};
use chrono::NaiveDate;
use db::models::instructor::Model as InstructorModel;
use serde::Serialize;

/// Full instructor projection.
#[derive(Debug, Serialize)]
pub struct InstructorResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub hire_date: Option<NaiveDate>,
}

impl From<InstructorModel> for InstructorResponse {
    fn from(instructor: InstructorModel) -> Self {
        Self {
            id: instructor.id,
            first_name: instructor.first_name,
            last_name: instructor.last_name,
            hire_date: instructor.hire_date,
        }
    }
}

/// GET /api/instructors
///
/// Retrieve all instructors in store-default order.
///
/// ### Responses
/// - `200 OK` - JSON array of `{id, first_name, last_name, hire_date}`
/// - `500 Internal Server Error` - Database error
pub async fn list_instructors(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<InstructorResponse>>, ApiError> {
    let instructors = InstructorModel::list(app_state.db()).await?;

    Ok(Json(
        instructors.into_iter().map(InstructorResponse::from).collect(),
    ))
}
