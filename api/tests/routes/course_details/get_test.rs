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
    use sea_orm::DatabaseConnection;
    use serde_json::Value;
    use tower::ServiceExt;

    struct TestData {
        course: CourseModel,
    }

    async fn setup_test_data(db: &DatabaseConnection) -> TestData {
        let instructor = InstructorModel::create(db, "Ada", "Lovelace", None)
            .await
            .expect("Failed to create instructor");
        let course = CourseModel::create(db, "CS101", Some(3), Some(instructor.id))
            .await
            .expect("Failed to create course");

        let s1 = StudentModel::create(db, "Grace", "Hopper", Some(2), Some(3.9))
            .await
            .expect("Failed to create student");
        let s2 = StudentModel::create(db, "Alan", "Turing", Some(3), Some(3.8))
            .await
            .expect("Failed to create student");
        // Enrolled elsewhere only; must not appear in CS101's detail.
        let s3 = StudentModel::create(db, "Edsger", "Dijkstra", Some(1), None)
            .await
            .expect("Failed to create student");
        let other = CourseModel::create(db, "CS999", None, None)
            .await
            .expect("Failed to create course");

        EnrollmentModel::enroll(db, s1.id, course.id, Some("A"))
            .await
            .expect("Failed to enroll student");
        EnrollmentModel::enroll(db, s2.id, course.id, Some("B+"))
            .await
            .expect("Failed to enroll student");
        EnrollmentModel::enroll(db, s3.id, other.id, None)
            .await
            .expect("Failed to enroll student");

        TestData { course }
    }

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

    // --- GET /api/course_details/{course_id} (get_course_detail) ---

    #[tokio::test]
    async fn test_course_detail_success() {
        let (app, db) = make_test_app().await;
        let data = setup_test_data(&db).await;

        let uri = format!("/api/course_details/{}", data.course.id);
        let response = send_get(&app, &uri).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["name"], "CS101");
        assert_eq!(json["instructor_name"], "Ada Lovelace");
        assert_eq!(json["student_info"]["number_of_students"], 2);

        let students = json["student_info"]["students"].as_array().unwrap();
        assert_eq!(students.len(), 2);

        let first_names: Vec<&str> = students
            .iter()
            .map(|s| s["first_name"].as_str().unwrap())
            .collect();
        assert!(first_names.contains(&"Grace"));
        assert!(first_names.contains(&"Alan"));
        assert!(!first_names.contains(&"Edsger"));
    }

    #[tokio::test]
    async fn test_course_detail_students_are_name_only() {
        let (app, db) = make_test_app().await;
        let data = setup_test_data(&db).await;

        let uri = format!("/api/course_details/{}", data.course.id);
        let response = send_get(&app, &uri).await;
        let json = get_json_body(response).await;

        for student in json["student_info"]["students"].as_array().unwrap() {
            let obj = student.as_object().unwrap();
            // Exactly first_name/last_name; no id or gpa leakage.
            assert_eq!(obj.len(), 2);
            assert!(obj.contains_key("first_name"));
            assert!(obj.contains_key("last_name"));
        }
    }

    #[tokio::test]
    async fn test_course_detail_not_found() {
        let (app, _db) = make_test_app().await;

        let response = send_get(&app, "/api/course_details/9999").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Course not found");
    }

    #[tokio::test]
    async fn test_course_detail_without_instructor() {
        let (app, db) = make_test_app().await;

        let course = CourseModel::create(&db, "SELF101", None, None)
            .await
            .expect("Failed to create course");

        let uri = format!("/api/course_details/{}", course.id);
        let response = send_get(&app, &uri).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["name"], "SELF101");
        assert_eq!(json["instructor_name"], "");
        assert_eq!(json["student_info"]["number_of_students"], 0);
        assert_eq!(json["student_info"]["students"], serde_json::json!([]));
    }
}
