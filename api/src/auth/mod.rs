pub mod claims;
pub mod extractors;
pub mod guards;
pub mod middleware;
pub mod policy;

pub use claims::{AuthUser, Claims};

use chrono::{Duration, Utc};
use jsonwebtoken::{Header, Validation, decode, encode, errors::Error as JwtError};
use util::state::JwtKeys;

/// Signs an access token for `username`, valid for the configured duration.
pub fn generate_jwt(keys: &JwtKeys, username: &str) -> Result<String, JwtError> {
    let expiry = Utc::now() + Duration::minutes(keys.duration_minutes());

    let claims = Claims {
        username: username.to_owned(),
        exp: expiry.timestamp() as usize,
    };

    encode(&Header::new(keys.algorithm()), &claims, keys.encoding_key())
}

/// Checks signature and expiry and returns the embedded claims.
///
/// A token without a `username` claim fails to deserialize and is rejected.
pub fn verify_jwt(keys: &JwtKeys, token: &str) -> Result<Claims, JwtError> {
    let validation = Validation::new(keys.algorithm());
    decode::<Claims>(token, keys.decoding_key(), &validation).map(|data| data.claims)
}
