//! Error type shared by every handler.
//!
//! Each variant maps to one HTTP status and renders the standard
//! [`ApiResponse`] envelope with an empty `data` object.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::response::{ApiResponse, Empty};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, invalid or expired credentials.
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),

    #[error(transparent)]
    Database(#[from] DbErr),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) | ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Maps a unique-index violation to `on_duplicate`; any other error stays a
    /// database error.
    pub fn unique_violation_or(err: DbErr, on_duplicate: ApiError) -> ApiError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => on_duplicate,
            _ => ApiError::Database(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            ApiError::Database(err) => {
                tracing::error!(error = %err, "database error");
                "Database error".to_string()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                msg.clone()
            }
            other => other.to_string(),
        };

        let body = Json(ApiResponse::<Empty>::error(message));

        if status == StatusCode::UNAUTHORIZED {
            return (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response();
        }

        (status, body).into_response()
    }
}
