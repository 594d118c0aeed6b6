//! Catalog Error Types
//!
//! This module provides catalog-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use auth::AuthError;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::{CommentId, MovieId};
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-specific error variants
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Movie with id:{0} not found")]
    MovieNotFound(MovieId),

    #[error("Comment with id:{0} not found")]
    CommentNotFound(CommentId),

    /// One rating per (movie, user)
    #[error("User has already rated this movie")]
    DuplicateRating,

    /// Request payload failed validation
    #[error("{0}")]
    Validation(String),

    /// Ownership or authentication failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Store error (keeps the store's own classification)
    #[error(transparent)]
    Store(#[from] AppError),
}

impl CatalogError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::MovieNotFound(_) | CatalogError::CommentNotFound(_) => {
                ErrorKind::NotFound
            }
            CatalogError::DuplicateRating => ErrorKind::BadRequest,
            CatalogError::Validation(_) => ErrorKind::UnprocessableEntity,
            CatalogError::Auth(e) => e.kind(),
            CatalogError::Store(e) => e.kind(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CatalogError::Store(e) if e.is_server_error() => {
                tracing::error!(error = ?e, "Catalog store error");
            }
            CatalogError::DuplicateRating => {
                tracing::info!("Duplicate rating rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Auth(e) => e.to_app_error(),
            CatalogError::Store(e) => AppError::new(e.kind(), e.message().to_owned()),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            // Auth errors log themselves
            CatalogError::Auth(e) => e.into_response(),
            other => {
                other.log();
                AppError::from(other).into_response()
            }
        }
    }
}
