use axum::{http::StatusCode, response::IntoResponse, response::Response};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No session cookie, or the token in it failed verification.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Unauthorized")]
    Unauthorized,

    /// Unknown email or wrong password at login.
    ///
    /// Both cases share one message so the response does not reveal which
    /// emails are registered. Results in a 401 Unauthorized response.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Registration attempted with an email that is already taken.
    ///
    /// Results in a 400 Bad Request response.
    #[error("User already exists")]
    UserExists,

    /// Authenticated user is not the owner of the requested server.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Forbidden")]
    Forbidden,

    /// Session refers to a user that no longer exists.
    #[error("User not found")]
    UserNotInDatabase(String),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For duplicate registration
/// - 401 Unauthorized - For missing sessions, bad credentials and deleted users
/// - 403 Forbidden - For ownership failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{:?}", self);

        let status = match self {
            Self::UserExists => StatusCode::BAD_REQUEST,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Unauthorized | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::UserNotInDatabase(_) => {
                return error_response(StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }
        };

        error_response(status, self.to_string())
    }
}
