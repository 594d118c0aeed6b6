//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod get_user;
pub mod guard;
pub mod register;
pub mod sign_in;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use get_user::GetUserUseCase;
pub use guard::{AuthGuard, require_ownership};
pub use register::{RegisterInput, RegisterUseCase};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use token::TokenService;
