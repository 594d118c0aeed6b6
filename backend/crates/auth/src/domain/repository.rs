//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Point lookup and delete come from the generic `kernel::repository::Repository<User>`.

use kernel::error::app_error::AppResult;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::email::Email;

/// User-specific persistence
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user; the password is already hashed. Returns the stored row
    /// (generated id and `created_at` included).
    ///
    /// A duplicate email surfaces as a constraint violation (400).
    async fn create_user(&self, user: &NewUser) -> AppResult<User>;

    /// Lookup by the unique email column
    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>>;
}
