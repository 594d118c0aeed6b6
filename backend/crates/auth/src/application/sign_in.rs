//! Sign In Use Case
//!
//! Checks email + password and issues an access token.

use std::sync::Arc;

use kernel::id::UserId;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    pub access_token: String,
    pub user_id: UserId,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // Unknown and malformed emails fail exactly like a wrong password
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;
        let password = ClearTextPassword::for_verification(input.password);

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let access_token = self.tokens.issue(user.id)?;

        tracing::info!(user_id = %user.id, "User signed in");

        Ok(SignInOutput {
            access_token,
            user_id: user.id,
        })
    }
}
