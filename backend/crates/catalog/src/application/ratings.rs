//! Rating Use Cases

use std::sync::Arc;

use auth::CurrentUser;
use kernel::id::MovieId;
use kernel::repository::OwnedRepository;

use crate::domain::entities::{MovieWithOwner, MovieWithRatings, Rating, RatingFields};
use crate::domain::repository::{MovieRepository, RatingRepository};
use crate::error::{CatalogError, CatalogResult};

/// A stored rating together with the movie it rates
pub struct RatedMovie {
    pub rating: Rating,
    pub movie: MovieWithOwner,
}

/// Rate a movie, at most once per user
pub struct RateMovieUseCase<M, R>
where
    M: MovieRepository,
    R: OwnedRepository<Rating> + RatingRepository,
{
    movie_repo: Arc<M>,
    rating_repo: Arc<R>,
}

impl<M, R> RateMovieUseCase<M, R>
where
    M: MovieRepository,
    R: OwnedRepository<Rating> + RatingRepository,
{
    pub fn new(movie_repo: Arc<M>, rating_repo: Arc<R>) -> Self {
        Self {
            movie_repo,
            rating_repo,
        }
    }

    /// The duplicate check is a read before the insert with no unique
    /// constraint behind it, so two concurrent submissions can both land.
    pub async fn execute(
        &self,
        fields: RatingFields,
        user: &CurrentUser,
    ) -> CatalogResult<RatedMovie> {
        let movie = self
            .movie_repo
            .find_with_owner(fields.movie_id)
            .await?
            .ok_or(CatalogError::MovieNotFound(fields.movie_id))?;

        if self
            .rating_repo
            .find_existing(fields.movie_id, user.id)
            .await?
            .is_some()
        {
            return Err(CatalogError::DuplicateRating);
        }

        let rating = self.rating_repo.create(&fields, user.id).await?;

        tracing::info!(
            rating_id = %rating.id,
            movie_id = %rating.movie_id,
            user_id = %user.id,
            "Movie rated"
        );

        Ok(RatedMovie { rating, movie })
    }
}

pub struct GetMovieRatingsUseCase<M>
where
    M: MovieRepository,
{
    movie_repo: Arc<M>,
}

impl<M> GetMovieRatingsUseCase<M>
where
    M: MovieRepository,
{
    pub fn new(movie_repo: Arc<M>) -> Self {
        Self { movie_repo }
    }

    pub async fn execute(&self, movie_id: MovieId) -> CatalogResult<MovieWithRatings> {
        self.movie_repo
            .find_with_ratings(movie_id)
            .await?
            .ok_or(CatalogError::MovieNotFound(movie_id))
    }
}
