//! Domain Entities
//!
//! Movies and the user content attached to them. Every row records the user
//! that created it in `user_id`; ownership checks compare against that.

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, MovieId, RatingId, ReplyId, UserId, markers};
use kernel::repository::{Owned, Patchable, Record};

// ============================================================================
// Movie
// ============================================================================

/// Movie entity
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub genre: String,
    pub director: String,
    pub created_at: DateTime<Utc>,
    pub user_id: UserId,
}

/// Caller-supplied movie columns; also the full replacement on update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieFields {
    pub title: String,
    pub genre: String,
    pub director: String,
}

impl Record for Movie {
    type Marker = markers::Movie;
    type Fields = MovieFields;

    const TABLE: &'static str = "movies";

    fn id(&self) -> MovieId {
        self.id
    }
}

impl Owned for Movie {
    fn owner_id(&self) -> UserId {
        self.user_id
    }
}

impl Patchable for Movie {
    type Changes = MovieFields;
}

/// Public view of the user who created a movie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub id: UserId,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Movie joined with its owner
#[derive(Debug, Clone, PartialEq)]
pub struct MovieWithOwner {
    pub movie: Movie,
    pub owner: Owner,
}

/// Movie with every rating given to it
#[derive(Debug, Clone, PartialEq)]
pub struct MovieWithRatings {
    pub movie: Movie,
    pub ratings: Vec<Rating>,
}

/// Movie with every comment posted on it
#[derive(Debug, Clone, PartialEq)]
pub struct MovieWithComments {
    pub movie: Movie,
    pub comments: Vec<Comment>,
}

/// Genre search with pagination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieQuery {
    /// Case-sensitive substring of `genre`; empty matches everything
    pub search: String,
    pub limit: i64,
    pub skip: i64,
}

impl Default for MovieQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            limit: 10,
            skip: 0,
        }
    }
}

// ============================================================================
// Rating
// ============================================================================

/// Rating entity
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub id: RatingId,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub movie_id: MovieId,
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatingFields {
    pub movie_id: MovieId,
    pub rating: f64,
}

impl Record for Rating {
    type Marker = markers::Rating;
    type Fields = RatingFields;

    const TABLE: &'static str = "ratings";

    fn id(&self) -> RatingId {
        self.id
    }
}

impl Owned for Rating {
    fn owner_id(&self) -> UserId {
        self.user_id
    }
}

// ============================================================================
// Comment
// ============================================================================

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub movie_id: MovieId,
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentFields {
    pub movie_id: MovieId,
    pub content: String,
}

impl Record for Comment {
    type Marker = markers::Comment;
    type Fields = CommentFields;

    const TABLE: &'static str = "comments";

    fn id(&self) -> CommentId {
        self.id
    }
}

impl Owned for Comment {
    fn owner_id(&self) -> UserId {
        self.user_id
    }
}

// ============================================================================
// Reply
// ============================================================================

/// Reply entity (a response to a comment)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub id: ReplyId,
    pub reply: String,
    pub created_at: DateTime<Utc>,
    pub comment_id: CommentId,
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyFields {
    pub comment_id: CommentId,
    pub reply: String,
}

impl Record for Reply {
    type Marker = markers::Reply;
    type Fields = ReplyFields;

    const TABLE: &'static str = "replies";

    fn id(&self) -> ReplyId {
        self.id
    }
}

impl Owned for Reply {
    fn owner_id(&self) -> UserId {
        self.user_id
    }
}
