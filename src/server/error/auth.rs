use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carries no `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token is malformed, carries a bad signature or an unusable subject.
    #[error("Invalid token")]
    InvalidToken,

    /// Token was valid once but its expiry has passed.
    #[error("Token expired")]
    TokenExpired,

    /// Token subject refers to a user that no longer exists.
    #[error("User {0} referenced by token not found")]
    UserNotInDatabase(Uuid),

    /// Login attempted with a wrong password.
    #[error("Invalid password")]
    InvalidPassword,

    /// Authenticated user lacks the permission required by the endpoint.
    ///
    /// # Fields
    /// - User id of the caller
    /// - Description of the denied action, logged server side only
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(Uuid, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `AccessDenied` → 403 Forbidden
/// - Everything else → 401 Unauthorized
///
/// Rejections are logged at warn level; client-facing messages stay generic for token issues
/// so that forged and stale tokens are indistinguishable.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Authentication required"),
            Self::InvalidToken | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Invalid token")
            }
            Self::TokenExpired => (StatusCode::UNAUTHORIZED, "Token expired"),
            Self::InvalidPassword => (StatusCode::UNAUTHORIZED, "Invalid password"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
