//! HTTP Handlers

use std::sync::Arc;

use auth::CurrentUser;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use kernel::extract::{AppJson, AppPath, AppQuery};
use kernel::id::MovieId;

use crate::application::{
    CommentMovieUseCase, CreateMovieUseCase, DeleteMovieUseCase, GetMovieCommentsUseCase,
    GetMovieRatingsUseCase, GetMovieUseCase, ListMoviesUseCase, RateMovieUseCase,
    ReplyCommentUseCase, UpdateMovieUseCase,
};
use crate::domain::repository::CatalogRepository;
use crate::error::CatalogResult;
use crate::presentation::dto::{
    CommentRequest, CommentResponse, ListMoviesParams, MovieCommentsResponse,
    MovieRatingsResponse, MovieRequest, MovieResponse, RatingRequest, RatingResponse,
    ReplyRequest, ReplyResponse,
};

/// Shared state for catalog handlers
pub struct CatalogAppState<S> {
    pub store: Arc<S>,
}

impl<S> Clone for CatalogAppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

// ============================================================================
// Movies
// ============================================================================

/// POST /movies
pub async fn create_movie<S: CatalogRepository>(
    State(state): State<CatalogAppState<S>>,
    Extension(user): Extension<CurrentUser>,
    AppJson(req): AppJson<MovieRequest>,
) -> CatalogResult<(StatusCode, Json<MovieResponse>)> {
    let movie = CreateMovieUseCase::new(state.store.clone())
        .execute(req.into(), &user)
        .await?;

    Ok((StatusCode::CREATED, Json(MovieResponse::from(&movie))))
}

/// GET /movies?limit=&skip=&search=
pub async fn list_movies<S: CatalogRepository>(
    State(state): State<CatalogAppState<S>>,
    AppQuery(params): AppQuery<ListMoviesParams>,
) -> CatalogResult<Json<Vec<MovieResponse>>> {
    let movies = ListMoviesUseCase::new(state.store.clone())
        .execute(params.into())
        .await?;

    Ok(Json(movies.iter().map(MovieResponse::from).collect()))
}

/// GET /movies/{id}
pub async fn get_movie<S: CatalogRepository>(
    State(state): State<CatalogAppState<S>>,
    AppPath(id): AppPath<i32>,
) -> CatalogResult<Json<MovieResponse>> {
    let movie = GetMovieUseCase::new(state.store.clone())
        .execute(MovieId::from_raw(id))
        .await?;

    Ok(Json(MovieResponse::from(&movie)))
}

/// PUT /movies/{id}
pub async fn update_movie<S: CatalogRepository>(
    State(state): State<CatalogAppState<S>>,
    Extension(user): Extension<CurrentUser>,
    AppPath(id): AppPath<i32>,
    AppJson(req): AppJson<MovieRequest>,
) -> CatalogResult<Json<MovieResponse>> {
    let movie = UpdateMovieUseCase::new(state.store.clone())
        .execute(MovieId::from_raw(id), req.into(), &user)
        .await?;

    Ok(Json(MovieResponse::from(&movie)))
}

/// DELETE /movies/{id}
pub async fn delete_movie<S: CatalogRepository>(
    State(state): State<CatalogAppState<S>>,
    Extension(user): Extension<CurrentUser>,
    AppPath(id): AppPath<i32>,
) -> CatalogResult<StatusCode> {
    DeleteMovieUseCase::new(state.store.clone())
        .execute(MovieId::from_raw(id), &user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Ratings
// ============================================================================

/// POST /ratings
pub async fn rate_movie<S: CatalogRepository>(
    State(state): State<CatalogAppState<S>>,
    Extension(user): Extension<CurrentUser>,
    AppJson(req): AppJson<RatingRequest>,
) -> CatalogResult<(StatusCode, Json<RatingResponse>)> {
    let rated = RateMovieUseCase::new(state.store.clone(), state.store.clone())
        .execute(req.into(), &user)
        .await?;

    Ok((StatusCode::CREATED, Json(RatingResponse::from(&rated))))
}

/// GET /ratings/{movie_id}
pub async fn get_movie_ratings<S: CatalogRepository>(
    State(state): State<CatalogAppState<S>>,
    AppPath(movie_id): AppPath<i32>,
) -> CatalogResult<Json<MovieRatingsResponse>> {
    let movie = GetMovieRatingsUseCase::new(state.store.clone())
        .execute(MovieId::from_raw(movie_id))
        .await?;

    Ok(Json(MovieRatingsResponse::from(&movie)))
}

// ============================================================================
// Comments
// ============================================================================

/// POST /comments
pub async fn comment_movie<S: CatalogRepository>(
    State(state): State<CatalogAppState<S>>,
    Extension(user): Extension<CurrentUser>,
    AppJson(req): AppJson<CommentRequest>,
) -> CatalogResult<(StatusCode, Json<CommentResponse>)> {
    let posted = CommentMovieUseCase::new(state.store.clone(), state.store.clone())
        .execute(req.into(), &user)
        .await?;

    Ok((StatusCode::CREATED, Json(CommentResponse::from(&posted))))
}

/// GET /comments/{movie_id}
pub async fn get_movie_comments<S: CatalogRepository>(
    State(state): State<CatalogAppState<S>>,
    AppPath(movie_id): AppPath<i32>,
) -> CatalogResult<Json<MovieCommentsResponse>> {
    let movie = GetMovieCommentsUseCase::new(state.store.clone())
        .execute(MovieId::from_raw(movie_id))
        .await?;

    Ok(Json(MovieCommentsResponse::from(&movie)))
}

/// POST /replies
pub async fn reply_comment<S: CatalogRepository>(
    State(state): State<CatalogAppState<S>>,
    Extension(user): Extension<CurrentUser>,
    AppJson(req): AppJson<ReplyRequest>,
) -> CatalogResult<(StatusCode, Json<ReplyResponse>)> {
    let reply = ReplyCommentUseCase::new(state.store.clone(), state.store.clone())
        .execute(req.into(), &user)
        .await?;

    Ok((StatusCode::CREATED, Json(ReplyResponse::from(&reply))))
}
