//! Request Extractors
//!
//! Drop-in wrappers over axum's `Json`, `Path` and `Query` whose rejections
//! are [`AppError`]s, so malformed input renders as problem JSON like every
//! other error.

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::app_error::AppError;

/// JSON request body
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// URL path parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Path(value) =
            axum::extract::Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

/// Query string
#[derive(Debug, Clone, Copy, Default)]
pub struct AppQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Query(value) =
            axum::extract::Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Credentials {
        email: String,
    }

    #[derive(Debug, Deserialize)]
    struct Page {
        limit: i64,
    }

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/users")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn parts(uri: &str) -> Parts {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap()
            .into_parts()
            .0
    }

    #[tokio::test]
    async fn test_json_body() {
        let AppJson(creds) =
            AppJson::<Credentials>::from_request(json_request(r#"{"email":"a@b.com"}"#), &())
                .await
                .unwrap();
        assert_eq!(creds.email, "a@b.com");
    }

    #[tokio::test]
    async fn test_missing_field_is_unprocessable() {
        let err = AppJson::<Credentials>::from_request(json_request("{}"), &())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnprocessableEntity);
        assert!(err.message().contains("email"), "{}", err.message());
    }

    #[tokio::test]
    async fn test_syntax_error_is_bad_request() {
        let err = AppJson::<Credentials>::from_request(json_request("{not json"), &())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[tokio::test]
    async fn test_query_string() {
        let AppQuery(page) = AppQuery::<Page>::from_request_parts(&mut parts("/movies?limit=5"), &())
            .await
            .unwrap();
        assert_eq!(page.limit, 5);

        let err = AppQuery::<Page>::from_request_parts(&mut parts("/movies?limit=abc"), &())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }
}
