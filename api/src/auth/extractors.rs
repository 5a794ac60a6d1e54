use axum::{
    RequestPartsExt,
    extract::FromRequestParts,
    http::request::Parts,
};
use axum_extra::extract::TypedHeader;
use db::models::user;
use headers::{Authorization, authorization::Bearer};
use util::state::AppState;

use crate::auth::{claims::AuthUser, verify_jwt};
use crate::error::ApiError;

const INVALID_CREDENTIALS: &str = "Could not validate credentials";

/// Resolves the caller from the `Authorization: Bearer <token>` header.
///
/// # Errors
/// - `401 Unauthorized` when the header is missing or malformed, the token
///   fails verification, or the named user no longer exists.
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| ApiError::Unauthorized("Not authenticated".into()))?;

        let claims = verify_jwt(state.jwt(), bearer.token()).map_err(|e| {
            tracing::debug!(error = %e, "rejected access token");
            ApiError::Unauthorized(INVALID_CREDENTIALS.into())
        })?;

        let user = user::Model::find_by_username(state.db(), &claims.username)
            .await?
            .ok_or_else(|| ApiError::Unauthorized(INVALID_CREDENTIALS.into()))?;

        Ok(AuthUser(user))
    }
}
