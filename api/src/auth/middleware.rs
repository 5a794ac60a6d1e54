use axum::{
    RequestPartsExt,
    body::Body,
    extract::{ConnectInfo, State},
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::TypedHeader;
use headers::{Authorization, UserAgent, authorization::Bearer};
use std::net::SocketAddr;
use tracing::info;
use util::state::AppState;

use crate::auth::verify_jwt;

/// Logs method, path, client IP, username (if the token verifies) and
/// user-agent for each incoming request. CORS preflight requests are skipped.
///
/// ```ignore
/// let app = Router::new().layer(from_fn_with_state(app_state, log_request));
/// ```
///
/// The username comes from the token alone; no database lookup happens here.
pub async fn log_request(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let (mut parts, body) = req.into_parts();

    if parts.method == Method::OPTIONS {
        return next.run(Request::from_parts(parts, body)).await;
    }

    let ip = parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".into());

    let username = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .ok()
        .and_then(|TypedHeader(Authorization(bearer))| {
            verify_jwt(app_state.jwt(), bearer.token()).ok()
        })
        .map(|claims| claims.username);

    let user_agent = parts
        .extract::<TypedHeader<UserAgent>>()
        .await
        .ok()
        .map(|TypedHeader(ua)| ua.to_string());

    info!(
        method = ?parts.method,
        path = %parts.uri.path(),
        ip = %ip,
        user = username.as_deref().unwrap_or("anonymous"),
        user_agent = user_agent.as_deref().unwrap_or("unknown"),
        "Incoming request"
    );

    next.run(Request::from_parts(parts, body)).await
}
