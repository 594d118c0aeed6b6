//! API Application
//!
//! Router assembly shared by the binary and the end-to-end tests.

pub mod config;

use std::sync::Arc;

use auth::{AuthConfig, AuthGuard, TokenService, User, UserRepository};
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use catalog::CatalogRepository;
use kernel::repository::Repository;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AllowedOrigins;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// Build the full application router.
///
/// One [`TokenService`] is shared by the login handler and the bearer
/// middleware, so every token the API issues is accepted by it.
pub fn build_app<U, S>(
    users: Arc<U>,
    store: Arc<S>,
    auth_config: AuthConfig,
    origins: &AllowedOrigins,
) -> Router
where
    U: UserRepository + Repository<User> + Send + Sync + 'static,
    S: CatalogRepository,
{
    let auth_config = Arc::new(auth_config);
    let tokens = Arc::new(TokenService::new(&auth_config));
    let guard = AuthGuard::new(users.clone(), tokens.clone());

    Router::new()
        .merge(auth::auth_router_generic(users, tokens, auth_config))
        .merge(catalog::catalog_router_generic(store, guard))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(origins))
}

pub fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    let allow_origin = match origins {
        AllowedOrigins::Any => AllowOrigin::any(),
        AllowedOrigins::List(list) => {
            let values: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            AllowOrigin::list(values)
        }
    };

    // Bearer tokens travel in a header, so no credentials mode
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
}
