//! Repository Traits
//!
//! Movie and rating lookups beyond the generic CRUD contract in
//! `kernel::repository`. Comments and replies need nothing beyond it.

use kernel::error::app_error::AppResult;
use kernel::id::{MovieId, UserId};
use kernel::repository::{OwnedRepository, PatchRepository, Repository};

use crate::domain::entities::{
    Comment, Movie, MovieQuery, MovieWithComments, MovieWithOwner, MovieWithRatings, Rating,
    Reply,
};

/// Movie reads that join other tables
#[trait_variant::make(MovieRepository: Send)]
pub trait LocalMovieRepository {
    /// Genre search with pagination, each movie joined with its owner
    async fn list(&self, query: &MovieQuery) -> AppResult<Vec<MovieWithOwner>>;

    /// `Ok(None)` when the movie does not exist
    async fn find_with_owner(&self, id: MovieId) -> AppResult<Option<MovieWithOwner>>;

    /// Movie with all its ratings (possibly none); `Ok(None)` when the movie does not exist
    async fn find_with_ratings(&self, id: MovieId) -> AppResult<Option<MovieWithRatings>>;

    /// Movie with all its comments (possibly none); `Ok(None)` when the movie does not exist
    async fn find_with_comments(&self, id: MovieId) -> AppResult<Option<MovieWithComments>>;
}

#[trait_variant::make(RatingRepository: Send)]
pub trait LocalRatingRepository {
    /// The rating `user_id` already gave `movie_id`, if any
    async fn find_existing(&self, movie_id: MovieId, user_id: UserId)
    -> AppResult<Option<Rating>>;
}

/// Comment persistence
pub trait CommentRepository: Repository<Comment> + OwnedRepository<Comment> {}

impl<T> CommentRepository for T where T: Repository<Comment> + OwnedRepository<Comment> {}

/// Reply persistence
pub trait ReplyRepository: Repository<Reply> + OwnedRepository<Reply> {}

impl<T> ReplyRepository for T where T: Repository<Reply> + OwnedRepository<Reply> {}

/// Everything the catalog routes need from one store
pub trait CatalogRepository:
    Repository<Movie>
    + OwnedRepository<Movie>
    + PatchRepository<Movie>
    + MovieRepository
    + OwnedRepository<Rating>
    + RatingRepository
    + CommentRepository
    + ReplyRepository
    + Send
    + Sync
    + 'static
{
}

impl<T> CatalogRepository for T where
    T: Repository<Movie>
        + OwnedRepository<Movie>
        + PatchRepository<Movie>
        + MovieRepository
        + OwnedRepository<Rating>
        + RatingRepository
        + CommentRepository
        + ReplyRepository
        + Send
        + Sync
        + 'static
{
}
