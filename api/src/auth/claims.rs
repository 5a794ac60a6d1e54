use db::models::user;
use serde::{Deserialize, Serialize};

/// Payload of an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub username: String,
    pub exp: usize,
}

/// The authenticated caller, resolved from the token's `username` claim.
///
/// Inserted into request extensions by the authentication guard.
#[derive(Debug, Clone)]
pub struct AuthUser(pub user::Model);
