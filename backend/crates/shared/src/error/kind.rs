//! Error Kind - Classification of errors
//!
//! [`ErrorKind`] decides the HTTP status and the problem `type`/`title`
//! of a rendered error. Domain crates pick a kind; they never pick a status.

use serde::Serialize;

/// エラー種別
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert_eq!(kind.status_code(), 404);
/// assert_eq!(kind.title(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 制約違反・重複メール・重複評価
    BadRequest,
    /// トークンなし・無効・期限切れ、ログイン失敗
    Unauthorized,
    /// 認証済みだが所有者ではない
    Forbidden,
    NotFound,
    /// 入力値の検証エラー
    UnprocessableEntity,
    InternalServerError,
    /// データベース接続不可・プール枯渇
    ServiceUnavailable,
}

impl ErrorKind {
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::InternalServerError => 500,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// Reason phrase, used as the problem `title`
    pub const fn title(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// Problem `type` URI
    pub fn problem_type(&self) -> String {
        format!("https://httpstatuses.io/{}", self.status_code())
    }

    /// 5xx: logged at error level, message not shown to clients
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
