//! Auth Guard
//!
//! Turns a bearer token into the acting user and checks row ownership.

use std::sync::Arc;

use kernel::repository::{Owned, Repository};

use crate::application::token::TokenService;
use crate::domain::entity::user::{CurrentUser, User};
use crate::error::{AuthError, AuthResult};

/// Resolves the acting user of a request
pub struct AuthGuard<U> {
    users: Arc<U>,
    tokens: Arc<TokenService>,
}

impl<U> Clone for AuthGuard<U> {
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
            tokens: self.tokens.clone(),
        }
    }
}

impl<U> AuthGuard<U>
where
    U: Repository<User>,
{
    pub fn new(users: Arc<U>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// Verify the token and load its user.
    ///
    /// A valid token whose user has since been deleted is treated the same
    /// as a bad token.
    pub async fn resolve_current_user(&self, token: &str) -> AuthResult<CurrentUser> {
        let user_id = self.tokens.verify(token)?;

        match self.users.get_by_id(user_id).await? {
            Some(user) => Ok(CurrentUser::from(&user)),
            None => {
                tracing::debug!(user_id = %user_id, "Token subject no longer exists");
                Err(AuthError::InvalidToken)
            }
        }
    }
}

/// Fails with [`AuthError::Forbidden`] unless `user` owns `resource`
pub fn require_ownership<R: Owned>(resource: &R, user: &CurrentUser) -> AuthResult<()> {
    if resource.owner_id() == user.id {
        Ok(())
    } else {
        tracing::debug!(
            table = R::TABLE,
            owner_id = %resource.owner_id(),
            user_id = %user.id,
            "Ownership mismatch"
        );
        Err(AuthError::Forbidden)
    }
}
