//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use kernel::repository::Repository;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, config: AuthConfig) -> Router {
    let config = Arc::new(config);
    let tokens = Arc::new(TokenService::new(&config));

    auth_router_generic(Arc::new(repo), tokens, config)
}

/// Create a generic Auth router for any repository implementation
///
/// `tokens` must be the same service the bearer middleware verifies with.
pub fn auth_router_generic<U>(
    users: Arc<U>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
) -> Router
where
    U: UserRepository + Repository<User> + Send + Sync + 'static,
{
    let state = AuthAppState {
        users,
        tokens,
        config,
    };

    Router::new()
        .route("/users", post(handlers::create_user::<U>))
        .route("/users/{id}", get(handlers::get_user::<U>))
        .route("/login", post(handlers::login::<U>))
        .with_state(state)
}
