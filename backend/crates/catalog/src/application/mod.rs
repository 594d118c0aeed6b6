//! Application Layer
//!
//! Use cases for movies, ratings, comments and replies.

pub mod comments;
pub mod movies;
pub mod ratings;

// Re-exports
pub use comments::{
    CommentMovieUseCase, GetMovieCommentsUseCase, PostedComment, ReplyCommentUseCase,
};
pub use movies::{
    CreateMovieUseCase, DeleteMovieUseCase, GetMovieUseCase, ListMoviesUseCase,
    UpdateMovieUseCase,
};
pub use ratings::{GetMovieRatingsUseCase, RateMovieUseCase, RatedMovie};
