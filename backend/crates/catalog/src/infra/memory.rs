//! In-Memory Store
//!
//! One lock over all five tables. Foreign keys are checked on insert and
//! deletes cascade exactly like the `ON DELETE CASCADE` constraints in the
//! schema, so use cases behave the same as against PostgreSQL. Rows are kept
//! in id order.

use auth::domain::value_object::email::Email;
use auth::{NewUser, User, UserRepository};
use chrono::Utc;
use kernel::error::app_error::{AppError, AppResult};
use kernel::id::{CommentId, Id, MovieId, RatingId, ReplyId, UserId};
use kernel::repository::{OwnedRepository, PatchRepository, Record, Repository};
use parking_lot::RwLock;

use crate::domain::entities::{
    Comment, CommentFields, Movie, MovieFields, MovieQuery, MovieWithComments, MovieWithOwner,
    MovieWithRatings, Owner, Rating, RatingFields, Reply, ReplyFields,
};
use crate::domain::repository::{MovieRepository, RatingRepository};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    movies: Vec<Movie>,
    ratings: Vec<Rating>,
    comments: Vec<Comment>,
    replies: Vec<Reply>,
    last_id: LastIds,
}

/// Per-table sequences, like `SERIAL`
#[derive(Default)]
struct LastIds {
    users: i32,
    movies: i32,
    ratings: i32,
    comments: i32,
    replies: i32,
}

fn next_id<T>(seq: &mut i32) -> Id<T> {
    *seq += 1;
    Id::from_raw(*seq)
}

fn fk_violation(table: &'static str) -> AppError {
    tracing::debug!(table, "Foreign key violation");
    AppError::bad_request("Referenced row does not exist")
}

impl Tables {
    fn user_exists(&self, id: UserId) -> bool {
        self.users.iter().any(|u| u.id == id)
    }

    fn owner_of(&self, movie: &Movie) -> Option<Owner> {
        self.users.iter().find(|u| u.id == movie.user_id).map(|u| Owner {
            id: u.id,
            email: u.email.as_str().to_owned(),
            created_at: u.created_at,
        })
    }

    fn with_owner(&self, movie: &Movie) -> Option<MovieWithOwner> {
        Some(MovieWithOwner {
            movie: movie.clone(),
            owner: self.owner_of(movie)?,
        })
    }

    fn remove_comments_where(&mut self, doomed: impl Fn(&Comment) -> bool) -> u64 {
        let removed: Vec<CommentId> = self
            .comments
            .iter()
            .filter(|&c| doomed(c))
            .map(|c| c.id)
            .collect();
        self.comments.retain(|c| !removed.contains(&c.id));
        self.replies.retain(|r| !removed.contains(&r.comment_id));
        removed.len() as u64
    }

    fn remove_movies_where(&mut self, doomed: impl Fn(&Movie) -> bool) -> u64 {
        let removed: Vec<MovieId> = self
            .movies
            .iter()
            .filter(|&m| doomed(m))
            .map(|m| m.id)
            .collect();
        self.movies.retain(|m| !removed.contains(&m.id));
        self.ratings.retain(|r| !removed.contains(&r.movie_id));
        self.remove_comments_where(|c| removed.contains(&c.movie_id));
        removed.len() as u64
    }

    fn remove_user(&mut self, id: UserId) -> u64 {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        if self.users.len() == before {
            return 0;
        }
        self.remove_movies_where(|m| m.user_id == id);
        self.ratings.retain(|r| r.user_id != id);
        self.remove_comments_where(|c| c.user_id == id);
        self.replies.retain(|r| r.user_id != id);
        1
    }
}

/// In-memory implementation of every repository trait, for tests and local runs
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// Users
// ============================================================================

impl Repository<User> for MemoryStore {
    async fn get_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.tables.read().users.iter().find(|u| u.id == id).cloned())
    }

    async fn delete(&self, id: UserId) -> AppResult<u64> {
        Ok(self.tables.write().remove_user(id))
    }
}

impl UserRepository for MemoryStore {
    async fn create_user(&self, user: &NewUser) -> AppResult<User> {
        let mut tables = self.tables.write();
        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(AppError::bad_request("Duplicate key value"));
        }

        let created = User {
            id: next_id(&mut tables.last_id.users),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            created_at: Utc::now(),
        };
        tables.users.push(created.clone());
        Ok(created)
    }

    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>> {
        Ok(self
            .tables
            .read()
            .users
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }
}

// ============================================================================
// Movies
// ============================================================================

impl Repository<Movie> for MemoryStore {
    async fn get_by_id(&self, id: MovieId) -> AppResult<Option<Movie>> {
        Ok(self.tables.read().movies.iter().find(|m| m.id == id).cloned())
    }

    async fn delete(&self, id: MovieId) -> AppResult<u64> {
        Ok(self.tables.write().remove_movies_where(|m| m.id == id))
    }
}

impl OwnedRepository<Movie> for MemoryStore {
    async fn create(&self, fields: &MovieFields, owner: UserId) -> AppResult<Movie> {
        let mut tables = self.tables.write();
        if !tables.user_exists(owner) {
            return Err(fk_violation(Movie::TABLE));
        }

        let movie = Movie {
            id: next_id(&mut tables.last_id.movies),
            title: fields.title.clone(),
            genre: fields.genre.clone(),
            director: fields.director.clone(),
            created_at: Utc::now(),
            user_id: owner,
        };
        tables.movies.push(movie.clone());
        Ok(movie)
    }
}

impl PatchRepository<Movie> for MemoryStore {
    async fn update(&self, id: MovieId, changes: &MovieFields) -> AppResult<u64> {
        let mut tables = self.tables.write();
        let Some(movie) = tables.movies.iter_mut().find(|m| m.id == id) else {
            return Ok(0);
        };

        movie.title = changes.title.clone();
        movie.genre = changes.genre.clone();
        movie.director = changes.director.clone();
        Ok(1)
    }
}

impl MovieRepository for MemoryStore {
    async fn list(&self, query: &MovieQuery) -> AppResult<Vec<MovieWithOwner>> {
        let tables = self.tables.read();
        let skip = usize::try_from(query.skip).unwrap_or(0);
        let limit = usize::try_from(query.limit).unwrap_or(0);

        Ok(tables
            .movies
            .iter()
            .filter(|m| m.genre.contains(query.search.as_str()))
            .skip(skip)
            .take(limit)
            .filter_map(|m| tables.with_owner(m))
            .collect())
    }

    async fn find_with_owner(&self, id: MovieId) -> AppResult<Option<MovieWithOwner>> {
        let tables = self.tables.read();
        Ok(tables
            .movies
            .iter()
            .find(|m| m.id == id)
            .and_then(|m| tables.with_owner(m)))
    }

    async fn find_with_ratings(&self, id: MovieId) -> AppResult<Option<MovieWithRatings>> {
        let tables = self.tables.read();
        Ok(tables
            .movies
            .iter()
            .find(|m| m.id == id)
            .map(|m| MovieWithRatings {
                movie: m.clone(),
                ratings: tables
                    .ratings
                    .iter()
                    .filter(|r| r.movie_id == id)
                    .cloned()
                    .collect(),
            }))
    }

    async fn find_with_comments(&self, id: MovieId) -> AppResult<Option<MovieWithComments>> {
        let tables = self.tables.read();
        Ok(tables
            .movies
            .iter()
            .find(|m| m.id == id)
            .map(|m| MovieWithComments {
                movie: m.clone(),
                comments: tables
                    .comments
                    .iter()
                    .filter(|c| c.movie_id == id)
                    .cloned()
                    .collect(),
            }))
    }
}

// ============================================================================
// Ratings
// ============================================================================

impl Repository<Rating> for MemoryStore {
    async fn get_by_id(&self, id: RatingId) -> AppResult<Option<Rating>> {
        Ok(self.tables.read().ratings.iter().find(|r| r.id == id).cloned())
    }

    async fn delete(&self, id: RatingId) -> AppResult<u64> {
        let mut tables = self.tables.write();
        let before = tables.ratings.len();
        tables.ratings.retain(|r| r.id != id);
        Ok((before - tables.ratings.len()) as u64)
    }
}

impl OwnedRepository<Rating> for MemoryStore {
    async fn create(&self, fields: &RatingFields, owner: UserId) -> AppResult<Rating> {
        let mut tables = self.tables.write();
        if !tables.user_exists(owner) || !tables.movies.iter().any(|m| m.id == fields.movie_id) {
            return Err(fk_violation(Rating::TABLE));
        }

        let rating = Rating {
            id: next_id(&mut tables.last_id.ratings),
            rating: fields.rating,
            created_at: Utc::now(),
            movie_id: fields.movie_id,
            user_id: owner,
        };
        tables.ratings.push(rating.clone());
        Ok(rating)
    }
}

impl RatingRepository for MemoryStore {
    async fn find_existing(
        &self,
        movie_id: MovieId,
        user_id: UserId,
    ) -> AppResult<Option<Rating>> {
        Ok(self
            .tables
            .read()
            .ratings
            .iter()
            .find(|r| r.movie_id == movie_id && r.user_id == user_id)
            .cloned())
    }
}

// ============================================================================
// Comments
// ============================================================================

impl Repository<Comment> for MemoryStore {
    async fn get_by_id(&self, id: CommentId) -> AppResult<Option<Comment>> {
        Ok(self.tables.read().comments.iter().find(|c| c.id == id).cloned())
    }

    async fn delete(&self, id: CommentId) -> AppResult<u64> {
        Ok(self.tables.write().remove_comments_where(|c| c.id == id))
    }
}

impl OwnedRepository<Comment> for MemoryStore {
    async fn create(&self, fields: &CommentFields, owner: UserId) -> AppResult<Comment> {
        let mut tables = self.tables.write();
        if !tables.user_exists(owner) || !tables.movies.iter().any(|m| m.id == fields.movie_id) {
            return Err(fk_violation(Comment::TABLE));
        }

        let comment = Comment {
            id: next_id(&mut tables.last_id.comments),
            content: fields.content.clone(),
            created_at: Utc::now(),
            movie_id: fields.movie_id,
            user_id: owner,
        };
        tables.comments.push(comment.clone());
        Ok(comment)
    }
}

// ============================================================================
// Replies
// ============================================================================

impl Repository<Reply> for MemoryStore {
    async fn get_by_id(&self, id: ReplyId) -> AppResult<Option<Reply>> {
        Ok(self.tables.read().replies.iter().find(|r| r.id == id).cloned())
    }

    async fn delete(&self, id: ReplyId) -> AppResult<u64> {
        let mut tables = self.tables.write();
        let before = tables.replies.len();
        tables.replies.retain(|r| r.id != id);
        Ok((before - tables.replies.len()) as u64)
    }
}

impl OwnedRepository<Reply> for MemoryStore {
    async fn create(&self, fields: &ReplyFields, owner: UserId) -> AppResult<Reply> {
        let mut tables = self.tables.write();
        if !tables.user_exists(owner) || !tables.comments.iter().any(|c| c.id == fields.comment_id)
        {
            return Err(fk_violation(Reply::TABLE));
        }

        let reply = Reply {
            id: next_id(&mut tables.last_id.replies),
            reply: fields.reply.clone(),
            created_at: Utc::now(),
            comment_id: fields.comment_id,
            user_id: owner,
        };
        tables.replies.push(reply.clone());
        Ok(reply)
    }
}
