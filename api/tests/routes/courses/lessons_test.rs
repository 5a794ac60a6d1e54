#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use db::models::{
        course,
        lesson::{self, NewLesson},
        user::{self, Role},
    };
    use serde_json::json;

    use crate::helpers::{
        TestApp, body_json, create_course, create_user, make_test_app, send, token_for,
    };

    async fn add_lesson(app: &TestApp, author: &user::Model, course: &course::Model, title: &str) -> lesson::Model {
        lesson::Model::create(
            app.state.db(),
            author.id,
            course.id,
            NewLesson {
                title: title.into(),
                content: format!("{title} content"),
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn owner_creates_lesson() {
        let app = make_test_app().await;
        let lecturer = create_user(&app, "lect", Role::Lecturer).await;
        let course = create_course(&app, &lecturer, "Rust").await;

        let response = send(
            &app,
            Method::POST,
            &format!("/courses/{}/lessons", course.id),
            Some(&token_for(&app, &lecturer)),
            Some(json!({ "lesson_title": "Borrowing", "lesson_content": "Shared and mutable refs" })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["lesson_title"], "Borrowing");
        assert_eq!(json["data"]["course_info"]["course_id"], course.id);
        assert_eq!(json["data"]["course_info"]["course_name"], "Rust");
    }

    #[tokio::test]
    async fn create_checks_course_then_permission_then_uniqueness() {
        let app = make_test_app().await;
        let owner = create_user(&app, "owner", Role::Lecturer).await;
        let other = create_user(&app, "other", Role::Lecturer).await;
        let admin = create_user(&app, "root", Role::Admin).await;
        let course = create_course(&app, &owner, "Rust").await;
        add_lesson(&app, &owner, &course, "Taken").await;
        let uri = format!("/courses/{}/lessons", course.id);

        let missing = send(
            &app,
            Method::POST,
            "/courses/404/lessons",
            Some(&token_for(&app, &owner)),
            Some(json!({ "lesson_title": "x", "lesson_content": "y" })),
        )
        .await;
        assert_eq!(missing.status(), StatusCode::FORBIDDEN);

        // Permission is checked before the duplicate title.
        for intruder in [&other, &admin] {
            let response = send(
                &app,
                Method::POST,
                &uri,
                Some(&token_for(&app, intruder)),
                Some(json!({ "lesson_title": "Taken", "lesson_content": "fresh" })),
            )
            .await;
            assert_eq!(response.status(), StatusCode::FORBIDDEN);
            let json = body_json(response).await;
            assert_eq!(json["message"], "You don't have permission to add new lessons to: [ Rust ]");
        }

        let dup_title = send(
            &app,
            Method::POST,
            &uri,
            Some(&token_for(&app, &owner)),
            Some(json!({ "lesson_title": "Taken", "lesson_content": "fresh" })),
        )
        .await;
        assert_eq!(dup_title.status(), StatusCode::FORBIDDEN);
        let json = body_json(dup_title).await;
        assert_eq!(json["message"], "You already have a lesson titled [ Taken ]");

        let dup_content = send(
            &app,
            Method::POST,
            &uri,
            Some(&token_for(&app, &owner)),
            Some(json!({ "lesson_title": "Fresh", "lesson_content": "Taken content" })),
        )
        .await;
        assert_eq!(dup_content.status(), StatusCode::FORBIDDEN);
        let json = body_json(dup_content).await;
        assert_eq!(json["message"], "You've already added this lesson data content to Rust Course");
    }

    #[tokio::test]
    async fn listing_empty_course_is_not_found() {
        let app = make_test_app().await;
        let lecturer = create_user(&app, "lect", Role::Lecturer).await;
        let course = create_course(&app, &lecturer, "Rust").await;

        let empty = send(&app, Method::GET, &format!("/courses/{}/lessons", course.id), None, None).await;
        assert_eq!(empty.status(), StatusCode::NOT_FOUND);

        // No course check: an unknown course answers the same way.
        let unknown = send(&app, Method::GET, "/courses/999/lessons", None, None).await;
        assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn listing_returns_course_lessons_in_id_order() {
        let app = make_test_app().await;
        let lecturer = create_user(&app, "lect", Role::Lecturer).await;
        let rust = create_course(&app, &lecturer, "Rust").await;
        let go = create_course(&app, &lecturer, "Go").await;
        add_lesson(&app, &lecturer, &rust, "Second").await;
        add_lesson(&app, &lecturer, &go, "Elsewhere").await;
        add_lesson(&app, &lecturer, &rust, "First").await;

        let response = send(&app, Method::GET, &format!("/courses/{}/lessons", rust.id), None, None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let titles: Vec<_> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|l| l["lesson_title"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(titles, vec!["Second", "First"]);
    }

    #[tokio::test]
    async fn get_lesson_must_belong_to_course() {
        let app = make_test_app().await;
        let lecturer = create_user(&app, "lect", Role::Lecturer).await;
        let rust = create_course(&app, &lecturer, "Rust").await;
        let go = create_course(&app, &lecturer, "Go").await;
        let lesson = add_lesson(&app, &lecturer, &rust, "Traits").await;

        let ok = send(
            &app,
            Method::GET,
            &format!("/courses/{}/lessons/{}", rust.id, lesson.id),
            None,
            None,
        )
        .await;
        assert_eq!(ok.status(), StatusCode::OK);

        let wrong = send(
            &app,
            Method::GET,
            &format!("/courses/{}/lessons/{}", go.id, lesson.id),
            None,
            None,
        )
        .await;
        assert_eq!(wrong.status(), StatusCode::NOT_FOUND);
        let json = body_json(wrong).await;
        assert_eq!(json["message"], "Lesson not found");
    }

    #[tokio::test]
    async fn author_updates_lesson_partially() {
        let app = make_test_app().await;
        let lecturer = create_user(&app, "lect", Role::Lecturer).await;
        let course = create_course(&app, &lecturer, "Rust").await;
        let lesson = add_lesson(&app, &lecturer, &course, "Traits").await;

        let response = send(
            &app,
            Method::PUT,
            &format!("/courses/{}/lessons/{}", course.id, lesson.id),
            Some(&token_for(&app, &lecturer)),
            Some(json!({ "lesson_content": "Generic bounds" })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["lesson_title"], "Traits");
        assert_eq!(json["data"]["lesson_content"], "Generic bounds");
    }

    #[tokio::test]
    async fn update_and_delete_are_author_only() {
        let app = make_test_app().await;
        let owner = create_user(&app, "owner", Role::Lecturer).await;
        let admin = create_user(&app, "root", Role::Admin).await;
        let course = create_course(&app, &owner, "Rust").await;
        let lesson = add_lesson(&app, &owner, &course, "Traits").await;
        let uri = format!("/courses/{}/lessons/{}", course.id, lesson.id);

        // Admins pass the role check but are not the author.
        let put = send(
            &app,
            Method::PUT,
            &uri,
            Some(&token_for(&app, &admin)),
            Some(json!({ "lesson_title": "Nope" })),
        )
        .await;
        assert_eq!(put.status(), StatusCode::FORBIDDEN);

        let delete = send(&app, Method::DELETE, &uri, Some(&token_for(&app, &admin)), None).await;
        assert_eq!(delete.status(), StatusCode::FORBIDDEN);

        let delete = send(&app, Method::DELETE, &uri, Some(&token_for(&app, &owner)), None).await;
        assert_eq!(delete.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_rows() {
        let app = make_test_app().await;
        let lecturer = create_user(&app, "lect", Role::Lecturer).await;
        let course = create_course(&app, &lecturer, "Rust").await;
        let token = token_for(&app, &lecturer);

        let no_course = send(
            &app,
            Method::PUT,
            "/courses/999/lessons/1",
            Some(&token),
            Some(json!({ "lesson_title": "x" })),
        )
        .await;
        assert_eq!(no_course.status(), StatusCode::NOT_FOUND);

        let no_lesson = send(
            &app,
            Method::DELETE,
            &format!("/courses/{}/lessons/999", course.id),
            Some(&token),
            None,
        )
        .await;
        assert_eq!(no_lesson.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_looks_lesson_up_by_id_only() {
        let app = make_test_app().await;
        let lecturer = create_user(&app, "lect", Role::Lecturer).await;
        let rust = create_course(&app, &lecturer, "Rust").await;
        let go = create_course(&app, &lecturer, "Go").await;
        let lesson = add_lesson(&app, &lecturer, &rust, "Traits").await;

        let response = send(
            &app,
            Method::PUT,
            &format!("/courses/{}/lessons/{}", go.id, lesson.id),
            Some(&token_for(&app, &lecturer)),
            Some(json!({ "lesson_title": "Traits II" })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["course_info"]["course_name"], "Rust");
    }

    #[tokio::test]
    async fn update_to_taken_title_is_forbidden() {
        let app = make_test_app().await;
        let lecturer = create_user(&app, "lect", Role::Lecturer).await;
        let course = create_course(&app, &lecturer, "Rust").await;
        add_lesson(&app, &lecturer, &course, "Traits").await;
        let second = add_lesson(&app, &lecturer, &course, "Macros").await;

        let response = send(
            &app,
            Method::PUT,
            &format!("/courses/{}/lessons/{}", course.id, second.id),
            Some(&token_for(&app, &lecturer)),
            Some(json!({ "lesson_title": "Traits" })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let json = body_json(response).await;
        assert_eq!(json["message"], "A lesson with this title or content already exists");

        let stored = lesson::Model::find_by_id(app.state.db(), second.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "Macros");
    }
}
