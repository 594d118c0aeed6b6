//! Catalog Router

use std::sync::Arc;

use auth::{AuthGuard, PgUserRepository, User, require_bearer_auth};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use kernel::repository::Repository;

use crate::domain::repository::CatalogRepository;
use crate::infra::postgres::PgCatalogRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the Catalog router with PostgreSQL repositories
pub fn catalog_router(repo: PgCatalogRepository, guard: AuthGuard<PgUserRepository>) -> Router {
    catalog_router_generic(Arc::new(repo), guard)
}

/// Create a generic Catalog router for any store implementation
///
/// Reads are public; writes go through the bearer middleware, which puts
/// the acting [`CurrentUser`](auth::CurrentUser) into request extensions.
pub fn catalog_router_generic<S, U>(store: Arc<S>, guard: AuthGuard<U>) -> Router
where
    S: CatalogRepository,
    U: Repository<User> + Send + Sync + 'static,
{
    let state = CatalogAppState { store };

    let public = Router::new()
        .route("/movies", get(handlers::list_movies::<S>))
        .route("/movies/{id}", get(handlers::get_movie::<S>))
        .route("/ratings/{movie_id}", get(handlers::get_movie_ratings::<S>))
        .route(
            "/comments/{movie_id}",
            get(handlers::get_movie_comments::<S>),
        );

    let protected = Router::new()
        .route("/movies", post(handlers::create_movie::<S>))
        .route(
            "/movies/{id}",
            put(handlers::update_movie::<S>).delete(handlers::delete_movie::<S>),
        )
        .route("/ratings", post(handlers::rate_movie::<S>))
        .route("/comments", post(handlers::comment_movie::<S>))
        .route("/replies", post(handlers::reply_comment::<S>))
        .route_layer(from_fn_with_state(guard, require_bearer_auth::<U>));

    public.merge(protected).with_state(state)
}
