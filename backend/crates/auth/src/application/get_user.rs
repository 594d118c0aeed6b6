//! Get User Use Case

use std::sync::Arc;

use kernel::id::UserId;
use kernel::repository::Repository;

use crate::domain::entity::user::User;
use crate::error::{AuthError, AuthResult};

/// Public profile lookup by id
pub struct GetUserUseCase<U>
where
    U: Repository<User>,
{
    user_repo: Arc<U>,
}

impl<U> GetUserUseCase<U>
where
    U: Repository<User>,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, user_id: UserId) -> AuthResult<User> {
        self.user_repo
            .get_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound(user_id))
    }
}
