//! Bearer Credential Extraction
//!
//! Reads `Authorization: Bearer <token>` (RFC 6750) from request headers.

use axum::http::{HeaderMap, header};

/// Authentication scheme accepted in the Authorization header
pub const BEARER_SCHEME: &str = "Bearer";

/// Extract a bearer token from headers
///
/// The scheme is matched case-insensitively. Returns `None` when the
/// header is absent, not valid ASCII, uses another scheme, or carries an
/// empty credential.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, credentials) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }

    let token = credentials.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Build an Authorization header value for a token
pub fn bearer_header_value(token: &str) -> String {
    format!("{} {}", BEARER_SCHEME, token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_bearer_token() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(extract_bearer_token(&headers), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let headers = headers_with("bearer abc");
        assert_eq!(extract_bearer_token(&headers), Some("abc".to_string()));
    }

    #[test]
    fn test_rejects_other_schemes_and_empty_tokens() {
        assert_eq!(extract_bearer_token(&headers_with("Basic dXNlcjpwYXNz")), None);
        assert_eq!(extract_bearer_token(&headers_with("Bearer    ")), None);
        assert_eq!(extract_bearer_token(&headers_with("Bearer")), None);
        assert_eq!(extract_bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_header_value_round_trips() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&bearer_header_value("tok")).unwrap(),
        );
        assert_eq!(extract_bearer_token(&headers), Some("tok".to_string()));
    }
}
