//! Movie Use Cases

use std::sync::Arc;

use auth::{CurrentUser, require_ownership};
use kernel::id::MovieId;
use kernel::repository::{OwnedRepository, PatchRepository, Repository};

use crate::domain::entities::{Movie, MovieFields, MovieQuery, MovieWithOwner};
use crate::domain::repository::MovieRepository;
use crate::error::{CatalogError, CatalogResult};

/// Create a movie owned by the acting user
pub struct CreateMovieUseCase<M>
where
    M: OwnedRepository<Movie> + MovieRepository,
{
    movie_repo: Arc<M>,
}

impl<M> CreateMovieUseCase<M>
where
    M: OwnedRepository<Movie> + MovieRepository,
{
    pub fn new(movie_repo: Arc<M>) -> Self {
        Self { movie_repo }
    }

    pub async fn execute(
        &self,
        fields: MovieFields,
        user: &CurrentUser,
    ) -> CatalogResult<MovieWithOwner> {
        let movie = self.movie_repo.create(&fields, user.id).await?;

        tracing::info!(movie_id = %movie.id, user_id = %user.id, "Movie created");

        self.movie_repo
            .find_with_owner(movie.id)
            .await?
            .ok_or(CatalogError::MovieNotFound(movie.id))
    }
}

/// Genre search with pagination
pub struct ListMoviesUseCase<M>
where
    M: MovieRepository,
{
    movie_repo: Arc<M>,
}

impl<M> ListMoviesUseCase<M>
where
    M: MovieRepository,
{
    pub fn new(movie_repo: Arc<M>) -> Self {
        Self { movie_repo }
    }

    pub async fn execute(&self, query: MovieQuery) -> CatalogResult<Vec<MovieWithOwner>> {
        if query.limit < 0 || query.skip < 0 {
            return Err(CatalogError::Validation(
                "limit and skip must not be negative".to_string(),
            ));
        }

        Ok(self.movie_repo.list(&query).await?)
    }
}

pub struct GetMovieUseCase<M>
where
    M: MovieRepository,
{
    movie_repo: Arc<M>,
}

impl<M> GetMovieUseCase<M>
where
    M: MovieRepository,
{
    pub fn new(movie_repo: Arc<M>) -> Self {
        Self { movie_repo }
    }

    pub async fn execute(&self, id: MovieId) -> CatalogResult<MovieWithOwner> {
        self.movie_repo
            .find_with_owner(id)
            .await?
            .ok_or(CatalogError::MovieNotFound(id))
    }
}

/// Replace a movie's fields; owner only
pub struct UpdateMovieUseCase<M>
where
    M: Repository<Movie> + PatchRepository<Movie> + MovieRepository,
{
    movie_repo: Arc<M>,
}

impl<M> UpdateMovieUseCase<M>
where
    M: Repository<Movie> + PatchRepository<Movie> + MovieRepository,
{
    pub fn new(movie_repo: Arc<M>) -> Self {
        Self { movie_repo }
    }

    pub async fn execute(
        &self,
        id: MovieId,
        changes: MovieFields,
        user: &CurrentUser,
    ) -> CatalogResult<MovieWithOwner> {
        let movie = self
            .movie_repo
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::MovieNotFound(id))?;

        require_ownership(&movie, user)?;

        // Deleted between the read and the write
        if self.movie_repo.update(id, &changes).await? == 0 {
            return Err(CatalogError::MovieNotFound(id));
        }

        tracing::info!(movie_id = %id, user_id = %user.id, "Movie updated");

        self.movie_repo
            .find_with_owner(id)
            .await?
            .ok_or(CatalogError::MovieNotFound(id))
    }
}

/// Delete a movie with its ratings and comments; owner only
pub struct DeleteMovieUseCase<M>
where
    M: Repository<Movie>,
{
    movie_repo: Arc<M>,
}

impl<M> DeleteMovieUseCase<M>
where
    M: Repository<Movie>,
{
    pub fn new(movie_repo: Arc<M>) -> Self {
        Self { movie_repo }
    }

    pub async fn execute(&self, id: MovieId, user: &CurrentUser) -> CatalogResult<()> {
        let movie = self
            .movie_repo
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::MovieNotFound(id))?;

        require_ownership(&movie, user)?;

        if self.movie_repo.delete(id).await? == 0 {
            return Err(CatalogError::MovieNotFound(id));
        }

        tracing::info!(movie_id = %id, user_id = %user.id, "Movie deleted");

        Ok(())
    }
}
