use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::Request,
    middleware::Next,
    response::Response,
};
use util::state::AppState;

use crate::auth::claims::AuthUser;
use crate::error::ApiError;

/// Basic guard to ensure the request is authenticated.
///
/// On success the resolved [`AuthUser`] is inserted into the request
/// extensions for handlers to pick up with `Extension<AuthUser>`.
pub async fn allow_authenticated(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let (mut parts, body) = req.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, &app_state).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
