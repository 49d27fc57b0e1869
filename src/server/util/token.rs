//! JWT issuing and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::server::error::auth::AuthError;

/// Lifetime of an issued access token.
pub const TOKEN_TTL_DAYS: i64 = 30;

/// Claims carried by an access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues an HS256 access token for the given user.
///
/// # Arguments
/// - `user_id` - Subject of the token
/// - `secret` - Signing secret
///
/// # Returns
/// - `Ok(String)` - Encoded token
/// - `Err(jsonwebtoken::errors::Error)` - Encoding failed
pub fn issue_token(user_id: Uuid, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verifies a token and returns the user id it was issued for.
///
/// # Returns
/// - `Ok(Uuid)` - Token is valid and unexpired
/// - `Err(AuthError::TokenExpired)` - Token signature is valid but it has expired
/// - `Err(AuthError::InvalidToken)` - Token is malformed, forged or has a bad subject
pub fn verify_token(token: &str, secret: &str) -> Result<Uuid, AuthError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken,
    })?;

    Uuid::parse_str(&data.claims.sub).map_err(|_| AuthError::InvalidToken)
}
