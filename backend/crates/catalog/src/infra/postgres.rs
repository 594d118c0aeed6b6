//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::app_error::AppResult;
use kernel::id::{CommentId, MovieId, RatingId, ReplyId, UserId};
use kernel::repository::{OwnedRepository, PatchRepository, Repository};
use sqlx::PgPool;

use crate::domain::entities::{
    Comment, CommentFields, Movie, MovieFields, MovieQuery, MovieWithComments, MovieWithOwner,
    MovieWithRatings, Owner, Rating, RatingFields, Reply, ReplyFields,
};
use crate::domain::repository::{MovieRepository, RatingRepository};

/// PostgreSQL-backed catalog repository
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Movies
// ============================================================================

impl Repository<Movie> for PgCatalogRepository {
    async fn get_by_id(&self, id: MovieId) -> AppResult<Option<Movie>> {
        let row = sqlx::query_as::<_, MovieRow>(
            r#"
            SELECT id, title, genre, director, created_at, user_id
            FROM movies
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(MovieRow::into_movie))
    }

    async fn delete(&self, id: MovieId) -> AppResult<u64> {
        let deleted = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

impl OwnedRepository<Movie> for PgCatalogRepository {
    async fn create(&self, fields: &MovieFields, owner: UserId) -> AppResult<Movie> {
        let row = sqlx::query_as::<_, MovieRow>(
            r#"
            INSERT INTO movies (title, genre, director, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, genre, director, created_at, user_id
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.genre)
        .bind(&fields.director)
        .bind(owner.get())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_movie())
    }
}

impl PatchRepository<Movie> for PgCatalogRepository {
    async fn update(&self, id: MovieId, changes: &MovieFields) -> AppResult<u64> {
        let updated = sqlx::query(
            r#"
            UPDATE movies SET
                title = $2,
                genre = $3,
                director = $4
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .bind(&changes.title)
        .bind(&changes.genre)
        .bind(&changes.director)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated)
    }
}

impl MovieRepository for PgCatalogRepository {
    async fn list(&self, query: &MovieQuery) -> AppResult<Vec<MovieWithOwner>> {
        // strpos is a plain, case-sensitive substring test (no LIKE escaping)
        let rows = sqlx::query_as::<_, MovieOwnerRow>(
            r#"
            SELECT
                m.id, m.title, m.genre, m.director, m.created_at, m.user_id,
                u.email AS owner_email,
                u.created_at AS owner_created_at
            FROM movies m
            JOIN users u ON u.id = m.user_id
            WHERE strpos(m.genre, $1) > 0
            ORDER BY m.id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&query.search)
        .bind(query.limit)
        .bind(query.skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MovieOwnerRow::into_movie_with_owner).collect())
    }

    async fn find_with_owner(&self, id: MovieId) -> AppResult<Option<MovieWithOwner>> {
        let row = sqlx::query_as::<_, MovieOwnerRow>(
            r#"
            SELECT
                m.id, m.title, m.genre, m.director, m.created_at, m.user_id,
                u.email AS owner_email,
                u.created_at AS owner_created_at
            FROM movies m
            JOIN users u ON u.id = m.user_id
            WHERE m.id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(MovieOwnerRow::into_movie_with_owner))
    }

    async fn find_with_ratings(&self, id: MovieId) -> AppResult<Option<MovieWithRatings>> {
        let rows = sqlx::query_as::<_, MovieRatingRow>(
            r#"
            SELECT
                m.id, m.title, m.genre, m.director, m.created_at, m.user_id,
                r.id AS rating_id,
                r.rating AS rating_value,
                r.created_at AS rating_created_at,
                r.user_id AS rating_user_id
            FROM movies m
            LEFT JOIN ratings r ON r.movie_id = m.id
            WHERE m.id = $1
            ORDER BY r.id
            "#,
        )
        .bind(id.get())
        .fetch_all(&self.pool)
        .await?;

        let mut rows = rows.into_iter();
        let Some(first) = rows.next() else {
            return Ok(None);
        };

        let movie = first.movie.clone().into_movie();
        let ratings = std::iter::once(first)
            .chain(rows)
            .filter_map(|row| row.into_rating(movie.id))
            .collect();

        Ok(Some(MovieWithRatings { movie, ratings }))
    }

    async fn find_with_comments(&self, id: MovieId) -> AppResult<Option<MovieWithComments>> {
        let rows = sqlx::query_as::<_, MovieCommentRow>(
            r#"
            SELECT
                m.id, m.title, m.genre, m.director, m.created_at, m.user_id,
                c.id AS comment_id,
                c.content AS comment_content,
                c.created_at AS comment_created_at,
                c.user_id AS comment_user_id
            FROM movies m
            LEFT JOIN comments c ON c.movie_id = m.id
            WHERE m.id = $1
            ORDER BY c.id
            "#,
        )
        .bind(id.get())
        .fetch_all(&self.pool)
        .await?;

        let mut rows = rows.into_iter();
        let Some(first) = rows.next() else {
            return Ok(None);
        };

        let movie = first.movie.clone().into_movie();
        let comments = std::iter::once(first)
            .chain(rows)
            .filter_map(|row| row.into_comment(movie.id))
            .collect();

        Ok(Some(MovieWithComments { movie, comments }))
    }
}

// ============================================================================
// Ratings
// ============================================================================

impl Repository<Rating> for PgCatalogRepository {
    async fn get_by_id(&self, id: RatingId) -> AppResult<Option<Rating>> {
        let row = sqlx::query_as::<_, RatingRow>(
            r#"
            SELECT id, rating, created_at, movie_id, user_id
            FROM ratings
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(RatingRow::into_rating))
    }

    async fn delete(&self, id: RatingId) -> AppResult<u64> {
        let deleted = sqlx::query("DELETE FROM ratings WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

impl OwnedRepository<Rating> for PgCatalogRepository {
    async fn create(&self, fields: &RatingFields, owner: UserId) -> AppResult<Rating> {
        let row = sqlx::query_as::<_, RatingRow>(
            r#"
            INSERT INTO ratings (rating, movie_id, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, rating, created_at, movie_id, user_id
            "#,
        )
        .bind(fields.rating)
        .bind(fields.movie_id.get())
        .bind(owner.get())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_rating())
    }
}

impl RatingRepository for PgCatalogRepository {
    async fn find_existing(
        &self,
        movie_id: MovieId,
        user_id: UserId,
    ) -> AppResult<Option<Rating>> {
        let row = sqlx::query_as::<_, RatingRow>(
            r#"
            SELECT id, rating, created_at, movie_id, user_id
            FROM ratings
            WHERE movie_id = $1 AND user_id = $2
            LIMIT 1
            "#,
        )
        .bind(movie_id.get())
        .bind(user_id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(RatingRow::into_rating))
    }
}

// ============================================================================
// Comments
// ============================================================================

impl Repository<Comment> for PgCatalogRepository {
    async fn get_by_id(&self, id: CommentId) -> AppResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, content, created_at, movie_id, user_id
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CommentRow::into_comment))
    }

    async fn delete(&self, id: CommentId) -> AppResult<u64> {
        let deleted = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

impl OwnedRepository<Comment> for PgCatalogRepository {
    async fn create(&self, fields: &CommentFields, owner: UserId) -> AppResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            INSERT INTO comments (content, movie_id, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, content, created_at, movie_id, user_id
            "#,
        )
        .bind(&fields.content)
        .bind(fields.movie_id.get())
        .bind(owner.get())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_comment())
    }
}

// ============================================================================
// Replies
// ============================================================================

impl Repository<Reply> for PgCatalogRepository {
    async fn get_by_id(&self, id: ReplyId) -> AppResult<Option<Reply>> {
        let row = sqlx::query_as::<_, ReplyRow>(
            r#"
            SELECT id, reply, created_at, comment_id, user_id
            FROM replies
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ReplyRow::into_reply))
    }

    async fn delete(&self, id: ReplyId) -> AppResult<u64> {
        let deleted = sqlx::query("DELETE FROM replies WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

impl OwnedRepository<Reply> for PgCatalogRepository {
    async fn create(&self, fields: &ReplyFields, owner: UserId) -> AppResult<Reply> {
        let row = sqlx::query_as::<_, ReplyRow>(
            r#"
            INSERT INTO replies (reply, comment_id, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, reply, created_at, comment_id, user_id
            "#,
        )
        .bind(&fields.reply)
        .bind(fields.comment_id.get())
        .bind(owner.get())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_reply())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(Clone, sqlx::FromRow)]
struct MovieRow {
    id: i32,
    title: String,
    genre: String,
    director: String,
    created_at: DateTime<Utc>,
    user_id: i32,
}

impl MovieRow {
    fn into_movie(self) -> Movie {
        Movie {
            id: MovieId::from_raw(self.id),
            title: self.title,
            genre: self.genre,
            director: self.director,
            created_at: self.created_at,
            user_id: UserId::from_raw(self.user_id),
        }
    }
}

#[derive(sqlx::FromRow)]
struct MovieOwnerRow {
    #[sqlx(flatten)]
    movie: MovieRow,
    owner_email: String,
    owner_created_at: DateTime<Utc>,
}

impl MovieOwnerRow {
    fn into_movie_with_owner(self) -> MovieWithOwner {
        let movie = self.movie.into_movie();
        let owner = Owner {
            id: movie.user_id,
            email: self.owner_email,
            created_at: self.owner_created_at,
        };
        MovieWithOwner { movie, owner }
    }
}

#[derive(sqlx::FromRow)]
struct MovieRatingRow {
    #[sqlx(flatten)]
    movie: MovieRow,
    rating_id: Option<i32>,
    rating_value: Option<f64>,
    rating_created_at: Option<DateTime<Utc>>,
    rating_user_id: Option<i32>,
}

impl MovieRatingRow {
    /// `None` for the all-NULL row of a movie without ratings
    fn into_rating(self, movie_id: MovieId) -> Option<Rating> {
        Some(Rating {
            id: RatingId::from_raw(self.rating_id?),
            rating: self.rating_value?,
            created_at: self.rating_created_at?,
            movie_id,
            user_id: UserId::from_raw(self.rating_user_id?),
        })
    }
}

#[derive(sqlx::FromRow)]
struct MovieCommentRow {
    #[sqlx(flatten)]
    movie: MovieRow,
    comment_id: Option<i32>,
    comment_content: Option<String>,
    comment_created_at: Option<DateTime<Utc>>,
    comment_user_id: Option<i32>,
}

impl MovieCommentRow {
    /// `None` for the all-NULL row of a movie without comments
    fn into_comment(self, movie_id: MovieId) -> Option<Comment> {
        Some(Comment {
            id: CommentId::from_raw(self.comment_id?),
            content: self.comment_content?,
            created_at: self.comment_created_at?,
            movie_id,
            user_id: UserId::from_raw(self.comment_user_id?),
        })
    }
}

#[derive(sqlx::FromRow)]
struct RatingRow {
    id: i32,
    rating: f64,
    created_at: DateTime<Utc>,
    movie_id: i32,
    user_id: i32,
}

impl RatingRow {
    fn into_rating(self) -> Rating {
        Rating {
            id: RatingId::from_raw(self.id),
            rating: self.rating,
            created_at: self.created_at,
            movie_id: MovieId::from_raw(self.movie_id),
            user_id: UserId::from_raw(self.user_id),
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: i32,
    content: String,
    created_at: DateTime<Utc>,
    movie_id: i32,
    user_id: i32,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            id: CommentId::from_raw(self.id),
            content: self.content,
            created_at: self.created_at,
            movie_id: MovieId::from_raw(self.movie_id),
            user_id: UserId::from_raw(self.user_id),
        }
    }
}

#[derive(sqlx::FromRow)]
struct ReplyRow {
    id: i32,
    reply: String,
    created_at: DateTime<Utc>,
    comment_id: i32,
    user_id: i32,
}

impl ReplyRow {
    fn into_reply(self) -> Reply {
        Reply {
            id: ReplyId::from_raw(self.id),
            reply: self.reply,
            created_at: self.created_at,
            comment_id: CommentId::from_raw(self.comment_id),
            user_id: UserId::from_raw(self.user_id),
        }
    }
}
