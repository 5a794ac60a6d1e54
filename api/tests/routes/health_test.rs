#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};

    use crate::helpers::{body_json, make_test_app, send};

    #[tokio::test]
    async fn root_returns_banner() {
        let app = make_test_app().await;

        let response = send(&app, Method::GET, "/", None, None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"], "Online Classroom API");
    }

    #[tokio::test]
    async fn health_is_public() {
        let app = make_test_app().await;

        let response = send(&app, Method::GET, "/health", None, None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], "OK");
    }
}
