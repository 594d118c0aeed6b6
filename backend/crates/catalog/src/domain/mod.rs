//! Domain Layer
//!
//! Contains entities and repository traits.

pub mod entities;
pub mod repository;

// Re-exports
pub use entities::{
    Comment, CommentFields, Movie, MovieFields, MovieQuery, MovieWithComments, MovieWithOwner,
    MovieWithRatings, Owner, Rating, RatingFields, Reply, ReplyFields,
};
pub use repository::{
    CatalogRepository, CommentRepository, MovieRepository, RatingRepository, ReplyRepository,
};
