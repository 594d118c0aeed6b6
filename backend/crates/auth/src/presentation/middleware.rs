//! Auth Middleware
//!
//! Middleware for requiring a bearer token on protected routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use kernel::repository::Repository;
use platform::bearer::extract_bearer_token;

use crate::application::guard::AuthGuard;
use crate::domain::entity::user::User;
use crate::error::AuthError;

/// Resolve `Authorization: Bearer <token>` and insert the
/// [`CurrentUser`](crate::domain::entity::user::CurrentUser) into request
/// extensions.
///
/// Usage:
/// ```ignore
/// router.route_layer(axum::middleware::from_fn_with_state(
///     guard,
///     require_bearer_auth::<PgUserRepository>,
/// ))
/// ```
pub async fn require_bearer_auth<U>(
    State(guard): State<AuthGuard<U>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    U: Repository<User> + Send + Sync + 'static,
{
    let token = extract_bearer_token(req.headers()).ok_or(AuthError::NotAuthenticated)?;

    let user = guard.resolve_current_user(&token).await?;

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
