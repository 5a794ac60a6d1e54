#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use db::models::user::Role;
    use serde_json::{Value, json};

    use crate::helpers::{body_json, create_course, create_user, make_test_app, send, token_for};

    fn course_payload(name: &str) -> Value {
        json!({
            "course_name": name,
            "course_description": "Ownership and lifetimes",
            "course_instructor": "Dr. Okafor",
            "course_capacity": 80,
            "course_location": "IT 4-1",
            "start_date": "2025-02-01",
            "end_date": "2025-06-01"
        })
    }

    #[tokio::test]
    async fn lecturer_creates_course() {
        let app = make_test_app().await;
        let lecturer = create_user(&app, "lect", Role::Lecturer).await;
        let token = token_for(&app, &lecturer);

        let response = send(
            &app,
            Method::POST,
            "/courses",
            Some(&token),
            Some(course_payload("Rust 101")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["data"]["course_name"], "Rust 101");
        assert_eq!(json["data"]["course_capacity"], 80);
        assert_eq!(json["data"]["lecturer_info"]["username"], "lect");
        assert_eq!(json["data"]["lecturer_info"]["email"], "lect@example.com");
    }

    #[tokio::test]
    async fn requires_authentication() {
        let app = make_test_app().await;

        let response = send(
            &app,
            Method::POST,
            "/courses",
            None,
            Some(course_payload("Rust 101")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn non_lecturers_are_forbidden() {
        let app = make_test_app().await;

        for (name, role) in [("stu", Role::Student), ("root", Role::Admin)] {
            let user = create_user(&app, name, role).await;
            let token = token_for(&app, &user);

            let response = send(
                &app,
                Method::POST,
                "/courses",
                Some(&token),
                Some(course_payload("Rust 101")),
            )
            .await;

            assert_eq!(response.status(), StatusCode::FORBIDDEN);
            let json = body_json(response).await;
            assert_eq!(json["message"], "Only lecturers are allowed to add new courses");
        }
    }

    #[tokio::test]
    async fn duplicate_name_is_forbidden_before_role_check() {
        let app = make_test_app().await;
        let lecturer = create_user(&app, "lect", Role::Lecturer).await;
        create_course(&app, &lecturer, "Rust 101").await;

        let student = create_user(&app, "stu", Role::Student).await;
        let response = send(
            &app,
            Method::POST,
            "/courses",
            Some(&token_for(&app, &student)),
            Some(course_payload("Rust 101")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Rust 101 is already added");

        let again = send(
            &app,
            Method::POST,
            "/courses",
            Some(&token_for(&app, &lecturer)),
            Some(course_payload("Rust 101")),
        )
        .await;
        assert_eq!(again.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn empty_name_is_bad_request() {
        let app = make_test_app().await;
        let lecturer = create_user(&app, "lect", Role::Lecturer).await;

        let response = send(
            &app,
            Method::POST,
            "/courses",
            Some(&token_for(&app, &lecturer)),
            Some(course_payload("")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
