//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<User> {
        let email = Email::new(input.email)
            .map_err(|e| AuthError::Validation(e.message().to_owned()))?;

        // The unique index still backs this up under concurrent sign-ups
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.to_string()))?;
        let password_hash = password
            .hash(self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = self
            .user_repo
            .create_user(&NewUser {
                email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(user)
    }
}
