#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use db::models::{
        assignment::{self, NewAssignment},
        lesson::{self, NewLesson},
        user::Role,
    };
    use serde_json::json;

    use crate::helpers::{body_json, create_course, create_user, make_test_app, send};

    #[tokio::test]
    async fn empty_platform_lists_nothing() {
        let app = make_test_app().await;

        for uri in ["/lessons", "/assignments"] {
            let response = send(&app, Method::GET, uri, None, None).await;
            assert_eq!(response.status(), StatusCode::OK);
            let json = body_json(response).await;
            assert_eq!(json["data"], json!([]));
        }
    }

    #[tokio::test]
    async fn lessons_span_all_courses() {
        let app = make_test_app().await;
        let lecturer = create_user(&app, "lect", Role::Lecturer).await;
        let rust = create_course(&app, &lecturer, "Rust").await;
        let go = create_course(&app, &lecturer, "Go").await;
        for (course, title) in [(&rust, "Ownership"), (&go, "Goroutines"), (&rust, "Traits")] {
            lesson::Model::create(
                app.state.db(),
                lecturer.id,
                course.id,
                NewLesson {
                    title: title.into(),
                    content: format!("{title} body"),
                },
            )
            .await
            .unwrap();
        }

        let response = send(&app, Method::GET, "/lessons", None, None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data[0]["lesson_title"], "Ownership");
        assert_eq!(data[1]["course_info"]["course_name"], "Go");
        assert_eq!(data[2]["lesson_title"], "Traits");
    }

    #[tokio::test]
    async fn assignments_span_all_courses() {
        let app = make_test_app().await;
        let lecturer = create_user(&app, "lect", Role::Lecturer).await;
        let rust = create_course(&app, &lecturer, "Rust").await;
        let go = create_course(&app, &lecturer, "Go").await;
        for (course, title) in [(&go, "Channels"), (&rust, "Lifetimes")] {
            assignment::Model::create(
                app.state.db(),
                lecturer.id,
                course.id,
                NewAssignment {
                    title: title.into(),
                    description: format!("{title} description"),
                    questions: vec!["Explain".into()],
                    instruction: "Short answers".into(),
                    due_date: "2025-05-01".into(),
                    max_score: 10,
                },
            )
            .await
            .unwrap();
        }

        let response = send(&app, Method::GET, "/assignments", None, None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["assignment_title"], "Channels");
        assert_eq!(data[0]["course_info"]["course_name"], "Go");
        assert_eq!(data[1]["assignment_questions"], json!(["Explain"]));
    }
}
