#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use db::models::{
        assignment::{self, NewAssignment},
        course,
        user::{self, Role},
    };
    use serde_json::{Value, json};

    use crate::helpers::{
        TestApp, body_json, create_course, create_user, make_test_app, send, token_for,
    };

    fn payload(title: &str, description: &str) -> Value {
        json!({
            "assignment_title": title,
            "assignment_description": description,
            "assignment_questions": ["What is a lifetime?", "When does a value drop?"],
            "assignment_instruction": "Answer briefly",
            "max_score": 20,
            "due_date": "2025-04-01"
        })
    }

    async fn add_assignment(
        app: &TestApp,
        author: &user::Model,
        course: &course::Model,
        title: &str,
    ) -> assignment::Model {
        assignment::Model::create(
            app.state.db(),
            author.id,
            course.id,
            NewAssignment {
                title: title.into(),
                description: format!("{title} description"),
                questions: vec!["Q1".into(), "Q2".into()],
                instruction: "Be concise".into(),
                due_date: "2025-04-01".into(),
                max_score: 20,
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn owner_creates_assignment() {
        let app = make_test_app().await;
        let lecturer = create_user(&app, "lect", Role::Lecturer).await;
        let course = create_course(&app, &lecturer, "Rust").await;

        let response = send(
            &app,
            Method::POST,
            &format!("/courses/{}/assignments", course.id),
            Some(&token_for(&app, &lecturer)),
            Some(payload("Lifetimes", "Reason about scopes")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["assignment_title"], "Lifetimes");
        assert_eq!(
            json["data"]["assignment_questions"],
            json!(["What is a lifetime?", "When does a value drop?"])
        );
        assert_eq!(json["data"]["max_score"], 20);
        assert_eq!(json["data"]["course_info"]["course_name"], "Rust");
    }

    #[tokio::test]
    async fn create_rejects_duplicates_in_order() {
        let app = make_test_app().await;
        let lecturer = create_user(&app, "lect", Role::Lecturer).await;
        let course = create_course(&app, &lecturer, "Rust").await;
        add_assignment(&app, &lecturer, &course, "Taken").await;
        let uri = format!("/courses/{}/assignments", course.id);
        let token = token_for(&app, &lecturer);

        let dup_title = send(&app, Method::POST, &uri, Some(&token), Some(payload("Taken", "new"))).await;
        assert_eq!(dup_title.status(), StatusCode::FORBIDDEN);
        let json = body_json(dup_title).await;
        assert_eq!(json["message"], "A Course Assignment with the title 'Taken' already exists");

        let dup_desc = send(
            &app,
            Method::POST,
            &uri,
            Some(&token),
            Some(payload("Fresh", "Taken description")),
        )
        .await;
        assert_eq!(dup_desc.status(), StatusCode::FORBIDDEN);
        let json = body_json(dup_desc).await;
        assert_eq!(json["message"], "An assignment with this description has already been added.");
    }

    #[tokio::test]
    async fn student_cannot_create() {
        let app = make_test_app().await;
        let lecturer = create_user(&app, "lect", Role::Lecturer).await;
        let student = create_user(&app, "stu", Role::Student).await;
        let course = create_course(&app, &lecturer, "Rust").await;

        let response = send(
            &app,
            Method::POST,
            &format!("/courses/{}/assignments", course.id),
            Some(&token_for(&app, &student)),
            Some(payload("Lifetimes", "Reason about scopes")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn listing_requires_auth_and_existing_course() {
        let app = make_test_app().await;
        let lecturer = create_user(&app, "lect", Role::Lecturer).await;
        let course = create_course(&app, &lecturer, "Rust").await;
        let token = token_for(&app, &lecturer);
        let uri = format!("/courses/{}/assignments", course.id);

        let anonymous = send(&app, Method::GET, &uri, None, None).await;
        assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

        let unknown = send(&app, Method::GET, "/courses/999/assignments", Some(&token), None).await;
        assert_eq!(unknown.status(), StatusCode::FORBIDDEN);

        let empty = send(&app, Method::GET, &uri, Some(&token), None).await;
        assert_eq!(empty.status(), StatusCode::NOT_FOUND);

        add_assignment(&app, &lecturer, &course, "B").await;
        add_assignment(&app, &lecturer, &course, "A").await;

        let listed = send(&app, Method::GET, &uri, Some(&token), None).await;
        assert_eq!(listed.status(), StatusCode::OK);
        let json = body_json(listed).await;
        let titles: Vec<_> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["assignment_title"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[tokio::test]
    async fn get_assignment_is_public_and_scoped() {
        let app = make_test_app().await;
        let lecturer = create_user(&app, "lect", Role::Lecturer).await;
        let rust = create_course(&app, &lecturer, "Rust").await;
        let go = create_course(&app, &lecturer, "Go").await;
        let created = add_assignment(&app, &lecturer, &rust, "Lifetimes").await;

        let ok = send(
            &app,
            Method::GET,
            &format!("/courses/{}/assignments/{}", rust.id, created.id),
            None,
            None,
        )
        .await;
        assert_eq!(ok.status(), StatusCode::OK);

        let wrong_course = send(
            &app,
            Method::GET,
            &format!("/courses/{}/assignments/{}", go.id, created.id),
            None,
            None,
        )
        .await;
        assert_eq!(wrong_course.status(), StatusCode::NOT_FOUND);

        let no_course = send(
            &app,
            Method::GET,
            &format!("/courses/999/assignments/{}", created.id),
            None,
            None,
        )
        .await;
        assert_eq!(no_course.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn author_updates_then_deletes() {
        let app = make_test_app().await;
        let lecturer = create_user(&app, "lect", Role::Lecturer).await;
        let other = create_user(&app, "other", Role::Lecturer).await;
        let course = create_course(&app, &lecturer, "Rust").await;
        let created = add_assignment(&app, &lecturer, &course, "Lifetimes").await;
        let uri = format!("/courses/{}/assignments/{}", course.id, created.id);

        let forbidden = send(
            &app,
            Method::PUT,
            &uri,
            Some(&token_for(&app, &other)),
            Some(json!({ "max_score": 1 })),
        )
        .await;
        assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

        let updated = send(
            &app,
            Method::PUT,
            &uri,
            Some(&token_for(&app, &lecturer)),
            Some(json!({ "max_score": 35, "assignment_questions": ["Only"] })),
        )
        .await;
        assert_eq!(updated.status(), StatusCode::OK);
        let json = body_json(updated).await;
        assert_eq!(json["data"]["max_score"], 35);
        assert_eq!(json["data"]["assignment_questions"], json!(["Only"]));
        assert_eq!(json["data"]["assignment_title"], "Lifetimes");

        let deleted = send(&app, Method::DELETE, &uri, Some(&token_for(&app, &lecturer)), None).await;
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

        let again = send(&app, Method::DELETE, &uri, Some(&token_for(&app, &lecturer)), None).await;
        assert_eq!(again.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_to_taken_title_is_forbidden() {
        let app = make_test_app().await;
        let lecturer = create_user(&app, "lect", Role::Lecturer).await;
        let course = create_course(&app, &lecturer, "Rust").await;
        add_assignment(&app, &lecturer, &course, "Lifetimes").await;
        let second = add_assignment(&app, &lecturer, &course, "Generics").await;

        let response = send(
            &app,
            Method::PUT,
            &format!("/courses/{}/assignments/{}", course.id, second.id),
            Some(&token_for(&app, &lecturer)),
            Some(json!({ "assignment_title": "Lifetimes" })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let json = body_json(response).await;
        assert_eq!(
            json["message"],
            "An assignment with this title or description already exists"
        );

        let stored = assignment::Model::find_by_id(app.state.db(), second.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.title, "Generics");
    }
}
