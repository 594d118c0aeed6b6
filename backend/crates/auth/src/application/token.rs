//! Token Service
//!
//! Issues and verifies signed, time-limited bearer tokens (JWT, HMAC family).
//! Payload is `{ "user_id": <int>, "exp": <unix seconds> }`.

use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    user_id: i32,
    exp: i64,
}

/// Stateless token issuer/verifier; there is no revocation list
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header: Header,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(config.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(&config.secret_key),
            decoding_key: DecodingKey::from_secret(&config.secret_key),
            header: Header::new(config.algorithm),
            validation,
            ttl: config.access_token_ttl,
        }
    }

    /// Issue a token for `user_id` expiring `ttl` from now
    pub fn issue(&self, user_id: UserId) -> AuthResult<String> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token as if it had been created at `issued_at`
    pub fn issue_at(&self, user_id: UserId, issued_at: DateTime<Utc>) -> AuthResult<String> {
        let ttl_secs = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        let claims = Claims {
            user_id: user_id.get(),
            exp: issued_at.timestamp().saturating_add(ttl_secs),
        };

        encode(&self.header, &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Token encoding failed: {e}")))
    }

    /// Verify signature, algorithm and expiry; return the encoded user id.
    ///
    /// Every failure is reported as [`AuthError::InvalidToken`]; the cause is
    /// only logged.
    pub fn verify(&self, token: &str) -> AuthResult<UserId> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "Token rejected");
            AuthError::InvalidToken
        })?;

        if data.claims.user_id < 1 {
            tracing::debug!(user_id = data.claims.user_id, "Token carries no usable user id");
            return Err(AuthError::InvalidToken);
        }

        Ok(UserId::from_raw(data.claims.user_id))
    }
}
