//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from store errors to [`AppError`] and the
//! HTTP rendering of [`AppError`].

#[allow(unused_imports)]
use super::app_error::AppError;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found").with_source(err),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                AppError::service_unavailable("Database connection pool exhausted").with_source(err)
            }
            sqlx::Error::Database(db_err) => {
                // PostgreSQL error codes
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                let app_err = match db_err.code().as_deref() {
                    // Class 23: the request carried something the schema rejects
                    Some("23502") => AppError::bad_request("Required field is missing"),
                    Some("23503") => AppError::bad_request("Referenced row does not exist"),
                    Some("23505") => AppError::bad_request("Duplicate key value"),
                    Some(code) if code.starts_with("23") => {
                        AppError::bad_request("Integrity constraint violation")
                    }
                    // Class 53 (insufficient resources), 57 (operator intervention)
                    Some(code) if code.starts_with("53") || code.starts_with("57") => {
                        AppError::service_unavailable("Database unavailable")
                    }
                    _ => AppError::internal("Database error"),
                };
                app_err.with_source(err)
            }
            sqlx::Error::Io(_) => {
                AppError::service_unavailable("Database connection error").with_source(err)
            }
            sqlx::Error::Protocol(_) => {
                AppError::internal("Database protocol error").with_source(err)
            }
            _ => AppError::internal("Database error").with_source(err),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

/// Extractor rejections: a body of the wrong shape is 422, any other
/// client fault is 400.
#[cfg(feature = "axum")]
fn rejection(status: axum::http::StatusCode, detail: String) -> AppError {
    use axum::http::StatusCode;

    match status {
        StatusCode::UNPROCESSABLE_ENTITY => AppError::unprocessable(detail),
        status if status.is_server_error() => AppError::internal(detail),
        _ => AppError::bad_request(detail),
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        rejection(err.status(), err.body_text())
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::PathRejection> for AppError {
    fn from(err: axum::extract::rejection::PathRejection) -> Self {
        rejection(err.status(), err.body_text())
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::QueryRejection> for AppError {
    fn from(err: axum::extract::rejection::QueryRejection) -> Self {
        rejection(err.status(), err.body_text())
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::{StatusCode, header};

        use super::kind::ErrorKind;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": self.kind().problem_type(),
            "title": self.kind().title(),
            "status": self.status_code(),
            "detail": self.message(),
        });

        if self.kind() == ErrorKind::Unauthorized {
            // RFC 6750: bearer challenges go with every 401
            return (status, [(header::WWW_AUTHENTICATE, "Bearer")], Json(body)).into_response();
        }

        (status, Json(body)).into_response()
    }
}
