use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session, the client is not logged in.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("User {0} stored in session was not found in the database")]
    UserNotInDatabase(i32),

    /// The user is logged in but lacks a required permission.
    #[error("User {0} was denied access: {1}")]
    AccessDenied(i32, String),

    /// Email and password did not match a stored account.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The submitted admin code was wrong, already used or expired.
    #[error("Invalid or expired admin code")]
    InvalidAdminCode,
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For an invalid admin code
/// - 401 Unauthorized - For missing sessions and bad credentials
/// - 403 Forbidden - For insufficient permissions
/// - 404 Not Found - For session users missing from the database
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "Not authenticated"),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::InvalidAdminCode => (StatusCode::BAD_REQUEST, "Invalid or expired admin code"),
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
