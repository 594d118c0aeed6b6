//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use kernel::extract::{AppJson, AppPath};
use kernel::id::UserId;
use kernel::repository::Repository;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::application::{
    GetUserUseCase, RegisterInput, RegisterUseCase, SignInInput, SignInUseCase,
};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{CreateUserRequest, LoginRequest, TokenResponse, UserResponse};

/// Shared state for auth handlers
pub struct AuthAppState<U> {
    pub users: Arc<U>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<AuthConfig>,
}

impl<U> Clone for AuthAppState<U> {
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
            tokens: self.tokens.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Users
// ============================================================================

/// POST /users
pub async fn create_user<U>(
    State(state): State<AuthAppState<U>>,
    AppJson(req): AppJson<CreateUserRequest>,
) -> AuthResult<(StatusCode, Json<UserResponse>)>
where
    U: UserRepository + Repository<User> + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.users.clone(), state.config.clone());

    let user = use_case
        .execute(RegisterInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// GET /users/{id}
pub async fn get_user<U>(
    State(state): State<AuthAppState<U>>,
    AppPath(id): AppPath<i32>,
) -> AuthResult<Json<UserResponse>>
where
    U: UserRepository + Repository<User> + Send + Sync + 'static,
{
    let use_case = GetUserUseCase::new(state.users.clone());

    let user = use_case.execute(UserId::from_raw(id)).await?;

    Ok(Json(UserResponse::from(&user)))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<U>(
    State(state): State<AuthAppState<U>>,
    AppJson(req): AppJson<LoginRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    U: UserRepository + Repository<User> + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.users.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(SignInInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(TokenResponse::bearer(output.access_token)))
}
