//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::UserId;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// User not found
    #[error("User with id:{0} not found")]
    UserNotFound(UserId),

    /// Email already registered
    #[error("Email already registered")]
    EmailTaken,

    /// Unknown email or wrong password (deliberately indistinguishable)
    #[error("Invalid Credentials")]
    InvalidCredentials,

    /// No bearer token on a protected route
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Token rejected (bad signature, expired, malformed, or user gone)
    #[error("Could not validate credentials")]
    InvalidToken,

    /// Authenticated user does not own the resource
    #[error("Not authorized to perform requested action")]
    Forbidden,

    /// Request payload failed validation
    #[error("{0}")]
    Validation(String),

    /// Store error (keeps the store's own classification)
    #[error(transparent)]
    Store(#[from] AppError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNotFound(_) => ErrorKind::NotFound,
            AuthError::EmailTaken => ErrorKind::BadRequest,
            AuthError::InvalidCredentials
            | AuthError::NotAuthenticated
            | AuthError::InvalidToken => ErrorKind::Unauthorized,
            AuthError::Forbidden => ErrorKind::Forbidden,
            AuthError::Validation(_) => ErrorKind::UnprocessableEntity,
            AuthError::Store(e) => e.kind(),
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Store(e) => AppError::new(e.kind(), e.message().to_owned()),
            // Internal details stay in the log
            AuthError::Internal(_) => AppError::internal("Internal server error"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Store(e) if e.is_server_error() => {
                tracing::error!(error = ?e, "Auth store error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Forbidden => {
                tracing::warn!("Ownership check failed");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(
            AuthError::UserNotFound(UserId::from_raw(2)).status_code(),
            404
        );
        assert_eq!(AuthError::EmailTaken.status_code(), 400);
        assert_eq!(AuthError::InvalidToken.status_code(), 401);
        assert_eq!(AuthError::NotAuthenticated.status_code(), 401);
        assert_eq!(AuthError::Forbidden.status_code(), 403);
        assert_eq!(AuthError::Validation("bad".into()).status_code(), 422);
    }

    #[test]
    fn test_store_error_keeps_kind() {
        let err = AuthError::from(AppError::bad_request("Duplicate key value"));
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.to_app_error().message(), "Duplicate key value");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            AuthError::UserNotFound(UserId::from_raw(2)).to_string(),
            "User with id:2 not found"
        );
        assert_eq!(
            AuthError::InvalidToken.to_string(),
            "Could not validate credentials"
        );
    }

    #[test]
    fn test_internal_message_hidden() {
        let err = AuthError::Internal("argon2 exploded".into());
        assert_eq!(err.to_app_error().message(), "Internal server error");
    }
}
