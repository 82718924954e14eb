#[cfg(test)]
mod tests {
    use crate::helpers::app::make_test_app;
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use db::models::{
        course::Model as CourseModel, instructor::Model as InstructorModel,
        student::Model as StudentModel, student_course::Model as EnrollmentModel,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    async fn send_get(app: &axum::Router, uri: &str) -> axum::response::Response {
        let req = Request::builder()
            .method("GET")
            .uri(uri)
            .body(AxumBody::empty())
            .unwrap();
        app.clone().oneshot(req).await.unwrap()
    }

    // --- GET /api/courses (list_courses) ---

    #[tokio::test]
    async fn test_list_courses_empty_store() {
        let (app, _db) = make_test_app().await;

        let response = send_get(&app, "/api/courses").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_list_courses_nested_projections() {
        let (app, db) = make_test_app().await;

        let instructor = InstructorModel::create(&db, "Grace", "Hopper", None)
            .await
            .expect("Failed to create instructor");
        let taught = CourseModel::create(&db, "CS350", Some(4), Some(instructor.id))
            .await
            .expect("Failed to create course");
        let untaught = CourseModel::create(&db, "CS360", None, None)
            .await
            .expect("Failed to create course");

        let student = StudentModel::create(&db, "Alice", "Nkosi", Some(2), Some(3.7))
            .await
            .expect("Failed to create student");
        EnrollmentModel::enroll(&db, student.id, taught.id, Some("A"))
            .await
            .expect("Failed to enroll student");

        let response = send_get(&app, "/api/courses").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        let courses = json.as_array().unwrap();
        assert_eq!(courses.len(), 2);

        let cs350 = courses.iter().find(|c| c["name"] == "CS350").unwrap();
        assert_eq!(cs350["id"], taught.id);
        assert_eq!(cs350["credits"], 4);
        assert_eq!(cs350["instructor"]["first_name"], "Grace");
        assert_eq!(cs350["instructor"]["last_name"], "Hopper");

        let students = cs350["students"].as_array().unwrap();
        assert_eq!(students.len(), 1);
        let nested = students[0].as_object().unwrap();
        assert_eq!(nested.len(), 2);
        assert_eq!(nested["first_name"], "Alice");
        assert_eq!(nested["last_name"], "Nkosi");

        let cs360 = courses.iter().find(|c| c["name"] == "CS360").unwrap();
        assert!(cs360["instructor"].is_null());
        assert!(cs360["credits"].is_null());
        assert_eq!(cs360["students"], serde_json::json!([]));
    }
}
