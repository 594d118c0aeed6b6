//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, email value object, repository traits
//! - `application/` - Use cases, token service, auth guard
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, bearer middleware
//!
//! ## Features
//! - Registration with email + password
//! - Login issuing a signed, time-limited bearer token (JWT)
//! - Resolving the acting user from `Authorization: Bearer <token>`
//! - Per-row ownership checks for the resource crates
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (optional pepper)
//! - Tokens are stateless: no revocation, expiry enforced with zero leeway
//! - Every token failure surfaces as the same 401 response

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::guard::{AuthGuard, require_ownership};
pub use application::token::TokenService;
pub use domain::entity::user::{CurrentUser, NewUser, User};
pub use domain::repository::UserRepository;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::require_bearer_auth;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
