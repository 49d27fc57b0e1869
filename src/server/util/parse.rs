use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::server::error::AppError;

/// Parses a scanned attendance code into a UUID.
///
/// Codes printed on tickets and event posters are UUIDs; anything else can only match an
/// event's custom entry QR code.
///
/// # Arguments
/// - `code` - Raw code taken from the request path
///
/// # Returns
/// - `Some(Uuid)` - The code is a well-formed UUID
/// - `None` - The code is not a UUID
pub fn parse_code(code: &str) -> Option<Uuid> {
    Uuid::parse_str(code.trim()).ok()
}

/// Parses an optional JSON request body.
///
/// An empty body yields the type's default value so endpoints such as check-in can be called
/// without any payload.
///
/// # Arguments
/// - `body` - Raw request body bytes
///
/// # Returns
/// - `Ok(T)` - Parsed body, or `T::default()` when the body is empty
/// - `Err(AppError::BadRequest)` - Body is present but not valid JSON for `T`
pub fn parse_optional_body<T>(body: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(format!("Invalid body: {}", e)))
}
