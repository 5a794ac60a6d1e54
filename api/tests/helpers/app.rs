#![allow(dead_code)]

use api::{auth::generate_jwt, routes::routes};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, Response},
};
use db::models::{
    course::{self, NewCourse},
    user::{self, Role},
};
use db::test_utils::setup_test_db;
use jsonwebtoken::Algorithm;
use serde_json::Value;
use tower::ServiceExt;
use util::state::{AppState, JwtKeys};

pub const TEST_SECRET: &str = "integration-test-secret";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

/// Full router over a fresh in-memory database.
pub async fn make_test_app() -> TestApp {
    let db = setup_test_db().await;
    let jwt = JwtKeys::new(TEST_SECRET, Algorithm::HS256, 60).unwrap();
    let state = AppState::new(db, jwt);

    TestApp {
        router: routes(state.clone()),
        state,
    }
}

pub async fn create_user(app: &TestApp, username: &str, role: Role) -> user::Model {
    user::Model::create(
        app.state.db(),
        username,
        &format!("{username}@example.com"),
        "password123",
        role,
    )
    .await
    .unwrap()
}

pub async fn create_course(app: &TestApp, owner: &user::Model, name: &str) -> course::Model {
    course::Model::create(
        app.state.db(),
        owner.id,
        NewCourse {
            name: name.into(),
            description: format!("{name} description"),
            instructor: "Dr. Okafor".into(),
            capacity: 50,
            location: "Hall C".into(),
            start_date: "2025-02-01".into(),
            end_date: "2025-06-01".into(),
        },
    )
    .await
    .unwrap()
}

pub fn token_for(app: &TestApp, user: &user::Model) -> String {
    generate_jwt(app.state.jwt(), &user.username).unwrap()
}

/// Sends one request through the router. `body` is sent as JSON when present.
pub async fn send(
    app: &TestApp,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }

    let req = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.router.clone().oneshot(req).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
