//! Comment and Reply Use Cases

use std::sync::Arc;

use auth::CurrentUser;
use kernel::id::MovieId;

use crate::domain::entities::{
    Comment, CommentFields, MovieWithComments, MovieWithOwner, Reply, ReplyFields,
};
use crate::domain::repository::{CommentRepository, MovieRepository, ReplyRepository};
use crate::error::{CatalogError, CatalogResult};

/// A stored comment together with the movie it belongs to
pub struct PostedComment {
    pub comment: Comment,
    pub movie: MovieWithOwner,
}

pub struct CommentMovieUseCase<M, C>
where
    M: MovieRepository,
    C: CommentRepository,
{
    movie_repo: Arc<M>,
    comment_repo: Arc<C>,
}

impl<M, C> CommentMovieUseCase<M, C>
where
    M: MovieRepository,
    C: CommentRepository,
{
    pub fn new(movie_repo: Arc<M>, comment_repo: Arc<C>) -> Self {
        Self {
            movie_repo,
            comment_repo,
        }
    }

    pub async fn execute(
        &self,
        fields: CommentFields,
        user: &CurrentUser,
    ) -> CatalogResult<PostedComment> {
        let movie = self
            .movie_repo
            .find_with_owner(fields.movie_id)
            .await?
            .ok_or(CatalogError::MovieNotFound(fields.movie_id))?;

        let comment = self.comment_repo.create(&fields, user.id).await?;

        tracing::info!(
            comment_id = %comment.id,
            movie_id = %comment.movie_id,
            user_id = %user.id,
            "Comment posted"
        );

        Ok(PostedComment { comment, movie })
    }
}

pub struct GetMovieCommentsUseCase<M>
where
    M: MovieRepository,
{
    movie_repo: Arc<M>,
}

impl<M> GetMovieCommentsUseCase<M>
where
    M: MovieRepository,
{
    pub fn new(movie_repo: Arc<M>) -> Self {
        Self { movie_repo }
    }

    pub async fn execute(&self, movie_id: MovieId) -> CatalogResult<MovieWithComments> {
        self.movie_repo
            .find_with_comments(movie_id)
            .await?
            .ok_or(CatalogError::MovieNotFound(movie_id))
    }
}

pub struct ReplyCommentUseCase<C, R>
where
    C: CommentRepository,
    R: ReplyRepository,
{
    comment_repo: Arc<C>,
    reply_repo: Arc<R>,
}

impl<C, R> ReplyCommentUseCase<C, R>
where
    C: CommentRepository,
    R: ReplyRepository,
{
    pub fn new(comment_repo: Arc<C>, reply_repo: Arc<R>) -> Self {
        Self {
            comment_repo,
            reply_repo,
        }
    }

    pub async fn execute(&self, fields: ReplyFields, user: &CurrentUser) -> CatalogResult<Reply> {
        if self.comment_repo.get_by_id(fields.comment_id).await?.is_none() {
            return Err(CatalogError::CommentNotFound(fields.comment_id));
        }

        let reply = self.reply_repo.create(&fields, user.id).await?;

        tracing::info!(
            reply_id = %reply.id,
            comment_id = %reply.comment_id,
            user_id = %user.id,
            "Reply posted"
        );

        Ok(reply)
    }
}
