//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

use jsonwebtoken::Algorithm;
use rand::RngCore;

use crate::error::{AuthError, AuthResult};

/// Default access token lifetime in minutes
pub const DEFAULT_TOKEN_TTL_MINUTES: u64 = 30;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC key used to sign access tokens
    pub secret_key: Vec<u8>,
    /// Token signing algorithm (HS256, HS384 or HS512)
    pub algorithm: Algorithm,
    /// Access token lifetime
    pub access_token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret_key: vec![0u8; 32],
            algorithm: Algorithm::HS256,
            access_token_ttl: Duration::from_secs(DEFAULT_TOKEN_TTL_MINUTES * 60),
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random signing key (for development)
    pub fn development() -> Self {
        Self {
            secret_key: random_secret(),
            ..Default::default()
        }
    }

    /// Read `SECRET_KEY`, `ALGORITHM`, `ACCESS_TOKEN_EXPIRE_MINUTES` and
    /// `PASSWORD_PEPPER` from the process environment
    pub fn from_env() -> AuthResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source
    pub fn from_lookup<F>(lookup: F) -> AuthResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = match lookup("SECRET_KEY").filter(|s| !s.is_empty()) {
            Some(secret) => secret.into_bytes(),
            None if cfg!(debug_assertions) => {
                tracing::warn!("SECRET_KEY not set, signing tokens with a random key");
                random_secret()
            }
            None => return Err(AuthError::Internal("SECRET_KEY must be set".to_string())),
        };

        let algorithm = match lookup("ALGORITHM") {
            Some(name) => parse_algorithm(&name)?,
            None => Algorithm::HS256,
        };

        let minutes = match lookup("ACCESS_TOKEN_EXPIRE_MINUTES") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AuthError::Internal(format!("Invalid ACCESS_TOKEN_EXPIRE_MINUTES: {raw}"))
            })?,
            None => DEFAULT_TOKEN_TTL_MINUTES,
        };
        if minutes == 0 {
            return Err(AuthError::Internal(
                "ACCESS_TOKEN_EXPIRE_MINUTES must be positive".to_string(),
            ));
        }

        let password_pepper = lookup("PASSWORD_PEPPER")
            .filter(|p| !p.is_empty())
            .map(String::into_bytes);

        Ok(Self {
            secret_key,
            algorithm,
            access_token_ttl: Duration::from_secs(minutes.saturating_mul(60)),
            password_pepper,
        })
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret_key", &"[REDACTED]")
            .field("algorithm", &self.algorithm)
            .field("access_token_ttl", &self.access_token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Only the HMAC family is accepted: tokens are signed with a shared secret.
pub fn parse_algorithm(name: &str) -> AuthResult<Algorithm> {
    match name.trim().to_ascii_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(AuthError::Internal(format!(
            "Unsupported token algorithm: {other}"
        ))),
    }
}

fn random_secret() -> Vec<u8> {
    let mut secret = vec![0u8; 32];
    rand::rng().fill_bytes(&mut secret);
    secret
}
