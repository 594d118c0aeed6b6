//! Email Value Object
//!
//! Represents a syntactically valid email address. The domain part is
//! case-insensitive and stored lowercased; the local part is kept as typed.

use kernel::error::app_error::{AppError, AppResult};
use serde::Serialize;
use std::str::FromStr;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Maximum local part length (per RFC 5321)
const LOCAL_PART_MAX_LENGTH: usize = 64;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into();
        let email = email.trim();

        if email.is_empty() {
            return Err(AppError::unprocessable("Email cannot be empty"));
        }

        if email.len() > EMAIL_MAX_LENGTH {
            return Err(AppError::unprocessable(format!(
                "Email must be at most {} characters",
                EMAIL_MAX_LENGTH
            )));
        }

        let Some((local, domain)) = email.split_once('@') else {
            return Err(AppError::unprocessable("Invalid email format"));
        };

        if !Self::is_valid_local(local) || !Self::is_valid_domain(domain) {
            return Err(AppError::unprocessable("Invalid email format"));
        }

        Ok(Self(format!("{}@{}", local, domain.to_ascii_lowercase())))
    }

    fn is_valid_local(local: &str) -> bool {
        !local.is_empty()
            && local.len() <= LOCAL_PART_MAX_LENGTH
            && !local.chars().any(|c| c.is_whitespace() || c.is_control())
    }

    fn is_valid_domain(domain: &str) -> bool {
        // Must contain at least one dot, and no second '@'
        if domain.is_empty() || !domain.contains('.') {
            return false;
        }

        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }

        domain
            .split('.')
            .all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to string for database storage
    pub fn into_db(self) -> String {
        self.0
    }
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::error::kind::ErrorKind;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("jengreat94@gmail.com").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
        assert!(Email::new("  padded@example.com  ").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert!(Email::new("").is_err());
        assert!(Email::new("userexample.com").is_err());
        assert!(Email::new("user@").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("user@@example.com").is_err());
        assert!(Email::new("user@example").is_err());
        assert!(Email::new("user@-example.com").is_err());
        assert!(Email::new("user@example..com").is_err());
        assert!(Email::new("us er@example.com").is_err());
    }

    #[test]
    fn test_email_invalid_is_unprocessable() {
        let err = Email::new("not-an-email").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnprocessableEntity);
    }

    #[test]
    fn test_email_domain_lowercased() {
        let email = Email::new("User@Example.COM").unwrap();
        assert_eq!(email.as_str(), "User@example.com");
    }
}
