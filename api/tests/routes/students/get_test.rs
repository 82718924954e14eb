#[cfg(test)]
mod tests {
    use crate::helpers::app::make_test_app;
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use db::models::student::Model as StudentModel;
    use sea_orm::DatabaseConnection;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn setup_test_data(db: &DatabaseConnection) {
        StudentModel::create(db, "Alice", "Nkosi", Some(2), Some(3.7))
            .await
            .expect("Failed to create student");
        StudentModel::create(db, "Brian", "Adams", Some(1), Some(2.4))
            .await
            .expect("Failed to create student");
        StudentModel::create(db, "Carmen", "Zulu", None, Some(3.9))
            .await
            .expect("Failed to create student");
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

    // --- GET /api/students (list_students) ---

    #[tokio::test]
    async fn test_list_students_empty_store() {
        let (app, _db) = make_test_app().await;

        let response = send_get(&app, "/api/students").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_list_students_full_projection() {
        let (app, db) = make_test_app().await;
        setup_test_data(&db).await;

        let response = send_get(&app, "/api/students").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        let students = json.as_array().expect("expected a JSON array");
        assert_eq!(students.len(), 3);

        for student in students {
            let obj = student.as_object().unwrap();
            assert_eq!(obj.len(), 5);
            assert!(obj.contains_key("id"));
            assert!(obj.contains_key("first_name"));
            assert!(obj.contains_key("last_name"));
            assert!(obj.contains_key("year"));
            assert!(obj.contains_key("gpa"));
        }

        // Optional fields serialize as null when unset.
        let carmen = students
            .iter()
            .find(|s| s["first_name"] == "Carmen")
            .unwrap();
        assert!(carmen["year"].is_null());
    }

    #[tokio::test]
    async fn test_list_students_order_by_gpa_descending() {
        let (app, db) = make_test_app().await;
        setup_test_data(&db).await;

        let response = send_get(&app, "/api/students?order=gpa").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        let gpas: Vec<f64> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["gpa"].as_f64().unwrap())
            .collect();
        assert_eq!(gpas, vec![3.9, 3.7, 2.4]);
    }

    #[tokio::test]
    async fn test_list_students_order_by_last_name_ascending() {
        let (app, db) = make_test_app().await;
        setup_test_data(&db).await;

        let response = send_get(&app, "/api/students?order=last_name").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        let last_names: Vec<String> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["last_name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(last_names, vec!["Adams", "Nkosi", "Zulu"]);
    }

    #[tokio::test]
    async fn test_list_students_unknown_order_rejected() {
        let (app, db) = make_test_app().await;
        setup_test_data(&db).await;

        let response = send_get(&app, "/api/students?order=not_a_real_column").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid sort key 'not_a_real_column'");
    }

    #[tokio::test]
    async fn test_list_students_empty_order_is_unsorted() {
        let (app, db) = make_test_app().await;
        setup_test_data(&db).await;

        let response = send_get(&app, "/api/students?order=").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json.as_array().unwrap().len(), 3);
    }
}
