//! API DTOs (Data Transfer Objects)

use auth::presentation::dto::UserResponse;
use chrono::{DateTime, Utc};
use kernel::id::{CommentId, MovieId};
use serde::{Deserialize, Serialize};

use crate::application::{PostedComment, RatedMovie};
use crate::domain::entities::{
    Comment, CommentFields, MovieFields, MovieQuery, MovieWithComments, MovieWithOwner,
    MovieWithRatings, Owner, Rating, RatingFields, Reply, ReplyFields,
};

impl From<&Owner> for UserResponse {
    fn from(owner: &Owner) -> Self {
        Self {
            id: owner.id.get(),
            email: owner.email.clone(),
            created_at: owner.created_at,
        }
    }
}

// ============================================================================
// Movies
// ============================================================================

/// Movie create / replace request
#[derive(Deserialize)]
pub struct MovieRequest {
    pub title: String,
    pub genre: String,
    pub director: String,
}

impl From<MovieRequest> for MovieFields {
    fn from(req: MovieRequest) -> Self {
        Self {
            title: req.title,
            genre: req.genre,
            director: req.director,
        }
    }
}

/// Movie with its owner embedded as `user`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieResponse {
    pub id: i32,
    pub title: String,
    pub genre: String,
    pub director: String,
    pub created_at: DateTime<Utc>,
    pub user_id: i32,
    pub user: UserResponse,
}

impl From<&MovieWithOwner> for MovieResponse {
    fn from(value: &MovieWithOwner) -> Self {
        let movie = &value.movie;
        Self {
            id: movie.id.get(),
            title: movie.title.clone(),
            genre: movie.genre.clone(),
            director: movie.director.clone(),
            created_at: movie.created_at,
            user_id: movie.user_id.get(),
            user: UserResponse::from(&value.owner),
        }
    }
}

/// `GET /movies` query string
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ListMoviesParams {
    pub limit: i64,
    pub skip: i64,
    pub search: String,
}

impl Default for ListMoviesParams {
    fn default() -> Self {
        let query = MovieQuery::default();
        Self {
            limit: query.limit,
            skip: query.skip,
            search: query.search,
        }
    }
}

impl From<ListMoviesParams> for MovieQuery {
    fn from(params: ListMoviesParams) -> Self {
        Self {
            search: params.search,
            limit: params.limit,
            skip: params.skip,
        }
    }
}

// ============================================================================
// Ratings
// ============================================================================

#[derive(Deserialize)]
pub struct RatingRequest {
    pub movie_id: i32,
    pub rating: f64,
}

impl From<RatingRequest> for RatingFields {
    fn from(req: RatingRequest) -> Self {
        Self {
            movie_id: MovieId::from_raw(req.movie_id),
            rating: req.rating,
        }
    }
}

/// A stored rating with the rated movie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingResponse {
    pub id: i32,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub movie_id: i32,
    pub user_id: i32,
    pub movie: MovieResponse,
}

impl From<&RatedMovie> for RatingResponse {
    fn from(value: &RatedMovie) -> Self {
        let rating = &value.rating;
        Self {
            id: rating.id.get(),
            rating: rating.rating,
            created_at: rating.created_at,
            movie_id: rating.movie_id.get(),
            user_id: rating.user_id.get(),
            movie: MovieResponse::from(&value.movie),
        }
    }
}

/// One entry of `GET /ratings/{movie_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingEntry {
    pub id: i32,
    pub rating: f64,
    pub user_id: i32,
}

impl From<&Rating> for RatingEntry {
    fn from(rating: &Rating) -> Self {
        Self {
            id: rating.id.get(),
            rating: rating.rating,
            user_id: rating.user_id.get(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRatingsResponse {
    pub id: i32,
    pub title: String,
    pub genre: String,
    pub director: String,
    pub created_at: DateTime<Utc>,
    pub user_id: i32,
    pub ratings: Vec<RatingEntry>,
}

impl From<&MovieWithRatings> for MovieRatingsResponse {
    fn from(value: &MovieWithRatings) -> Self {
        let movie = &value.movie;
        Self {
            id: movie.id.get(),
            title: movie.title.clone(),
            genre: movie.genre.clone(),
            director: movie.director.clone(),
            created_at: movie.created_at,
            user_id: movie.user_id.get(),
            ratings: value.ratings.iter().map(RatingEntry::from).collect(),
        }
    }
}

// ============================================================================
// Comments
// ============================================================================

#[derive(Deserialize)]
pub struct CommentRequest {
    pub movie_id: i32,
    pub content: String,
}

impl From<CommentRequest> for CommentFields {
    fn from(req: CommentRequest) -> Self {
        Self {
            movie_id: MovieId::from_raw(req.movie_id),
            content: req.content,
        }
    }
}

/// A stored comment with the movie it was posted on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub movie_id: i32,
    pub user_id: i32,
    pub movie: MovieResponse,
}

impl From<&PostedComment> for CommentResponse {
    fn from(value: &PostedComment) -> Self {
        let comment = &value.comment;
        Self {
            id: comment.id.get(),
            content: comment.content.clone(),
            created_at: comment.created_at,
            movie_id: comment.movie_id.get(),
            user_id: comment.user_id.get(),
            movie: MovieResponse::from(&value.movie),
        }
    }
}

/// One entry of `GET /comments/{movie_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentEntry {
    pub id: i32,
    pub content: String,
    pub user_id: i32,
}

impl From<&Comment> for CommentEntry {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.get(),
            content: comment.content.clone(),
            user_id: comment.user_id.get(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieCommentsResponse {
    pub id: i32,
    pub title: String,
    pub genre: String,
    pub director: String,
    pub created_at: DateTime<Utc>,
    pub user_id: i32,
    pub comments: Vec<CommentEntry>,
}

impl From<&MovieWithComments> for MovieCommentsResponse {
    fn from(value: &MovieWithComments) -> Self {
        let movie = &value.movie;
        Self {
            id: movie.id.get(),
            title: movie.title.clone(),
            genre: movie.genre.clone(),
            director: movie.director.clone(),
            created_at: movie.created_at,
            user_id: movie.user_id.get(),
            comments: value.comments.iter().map(CommentEntry::from).collect(),
        }
    }
}

// ============================================================================
// Replies
// ============================================================================

/// Reply request; the text arrives as `content` and is stored as `reply`
#[derive(Deserialize)]
pub struct ReplyRequest {
    pub comment_id: i32,
    pub content: String,
}

impl From<ReplyRequest> for ReplyFields {
    fn from(req: ReplyRequest) -> Self {
        Self {
            comment_id: CommentId::from_raw(req.comment_id),
            reply: req.content,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyResponse {
    pub id: i32,
    pub reply: String,
    pub created_at: DateTime<Utc>,
    pub comment_id: i32,
    pub user_id: i32,
}

impl From<&Reply> for ReplyResponse {
    fn from(reply: &Reply) -> Self {
        Self {
            id: reply.id.get(),
            reply: reply.reply.clone(),
            created_at: reply.created_at,
            comment_id: reply.comment_id.get(),
            user_id: reply.user_id.get(),
        }
    }
}
