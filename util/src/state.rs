//! Application state container shared across Axum route handlers.
//!
//! This struct holds shared resources such as the database connection and the
//! token signing material. It is cloned into each handler via Axum's `State<T>`
//! extractor; both members are cheap to clone.

use crate::config;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};
use sea_orm::DatabaseConnection;
use std::str::FromStr;
use std::sync::Arc;

/// Signing material for access tokens.
///
/// Only the HMAC family is accepted since the keys are derived from a shared
/// secret.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
    algorithm: Algorithm,
    duration_minutes: i64,
}

impl JwtKeys {
    pub fn new(secret: &str, algorithm: Algorithm, duration_minutes: i64) -> Result<Self, String> {
        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(format!("unsupported JWT algorithm {algorithm:?}, expected HS256/HS384/HS512"));
        }
        if secret.is_empty() {
            return Err("JWT secret must not be empty".into());
        }

        Ok(Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
            algorithm,
            duration_minutes,
        })
    }

    /// Builds the keys from `JWT_SECRET`, `JWT_ALGORITHM` and `JWT_DURATION_MINUTES`.
    pub fn from_config() -> Result<Self, String> {
        let raw_alg = config::jwt_algorithm();
        let algorithm = Algorithm::from_str(&raw_alg)
            .map_err(|_| format!("unknown JWT algorithm '{raw_alg}'"))?;
        let minutes = i64::try_from(config::jwt_duration_minutes())
            .map_err(|_| "JWT_DURATION_MINUTES is out of range".to_string())?;
        Self::new(&config::jwt_secret(), algorithm, minutes)
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration_minutes
    }
}

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    jwt: JwtKeys,
}

impl AppState {
    /// Creates a new `AppState` from a database connection and the token keys.
    pub fn new(db: DatabaseConnection, jwt: JwtKeys) -> Self {
        Self { db, jwt }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns the token signing material.
    pub fn jwt(&self) -> &JwtKeys {
        &self.jwt
    }
}
