//! User Entity
//!
//! A registered account. The password is only ever held as an argon2 hash.

use chrono::{DateTime, Utc};
use kernel::id::{UserId, markers};
use kernel::repository::Record;
use platform::password::HashedPassword;

use crate::domain::value_object::email::Email;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned key
    pub id: UserId,
    /// Login email (unique)
    pub email: Email,
    /// Argon2id PHC hash
    pub password_hash: HashedPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Record for User {
    type Marker = markers::User;
    type Fields = NewUser;

    const TABLE: &'static str = "users";

    fn id(&self) -> UserId {
        self.id
    }
}

/// Columns supplied when registering; users have no owner
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password_hash: HashedPassword,
}

/// The authenticated principal of a request
///
/// Inserted into request extensions by the bearer middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: Email,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}
