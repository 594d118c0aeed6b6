//! Unit tests for Catalog crate

#[cfg(test)]
mod support {
    use auth::{CurrentUser, NewUser, UserRepository};
    use auth::domain::value_object::email::Email;
    use platform::password::ClearTextPassword;

    use crate::domain::entities::MovieFields;
    use crate::infra::memory::MemoryStore;

    pub async fn add_user(store: &MemoryStore, email: &str) -> CurrentUser {
        let password_hash = ClearTextPassword::for_verification("514500".to_string())
            .hash(None)
            .unwrap();
        let user = store
            .create_user(&NewUser {
                email: Email::new(email).unwrap(),
                password_hash,
            })
            .await
            .unwrap();
        CurrentUser::from(&user)
    }

    pub fn movie(title: &str, genre: &str) -> MovieFields {
        MovieFields {
            title: title.to_string(),
            genre: genre.to_string(),
            director: "Jack".to_string(),
        }
    }
}

#[cfg(test)]
mod movie_tests {
    use std::sync::Arc;

    use auth::AuthError;
    use kernel::id::MovieId;
    use kernel::repository::Repository;

    use super::support::*;
    use crate::application::{
        CreateMovieUseCase, DeleteMovieUseCase, GetMovieUseCase, ListMoviesUseCase,
        UpdateMovieUseCase,
    };
    use crate::domain::entities::{Movie, MovieQuery};
    use crate::error::CatalogError;
    use crate::infra::memory::MemoryStore;

    #[tokio::test]
    async fn test_create_then_get() {
        let store = Arc::new(MemoryStore::new());
        let user = add_user(&store, "jengreat94@gmail.com").await;

        let created = CreateMovieUseCase::new(store.clone())
            .execute(movie("Avatar", "Sci-Fi"), &user)
            .await
            .unwrap();
        assert_eq!(created.movie.user_id, user.id);
        assert_eq!(created.owner.email, "jengreat94@gmail.com");

        let fetched = GetMovieUseCase::new(store)
            .execute(created.movie.id)
            .await
            .unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_movie() {
        let result = GetMovieUseCase::new(Arc::new(MemoryStore::new()))
            .execute(MovieId::from_raw(1444))
            .await;
        assert!(
            matches!(result, Err(CatalogError::MovieNotFound(id)) if id.get() == 1444)
        );
    }

    #[tokio::test]
    async fn test_update_by_owner() {
        let store = Arc::new(MemoryStore::new());
        let user = add_user(&store, "owner@example.com").await;
        let created = CreateMovieUseCase::new(store.clone())
            .execute(movie("Avatar", "Sci-Fi"), &user)
            .await
            .unwrap();

        let updated = UpdateMovieUseCase::new(store.clone())
            .execute(created.movie.id, movie("Avatar 2", "Adventure"), &user)
            .await
            .unwrap();
        assert_eq!(updated.movie.id, created.movie.id);
        assert_eq!(updated.movie.title, "Avatar 2");
        assert_eq!(updated.movie.genre, "Adventure");
        assert_eq!(updated.movie.created_at, created.movie.created_at);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_movie() {
        let store = Arc::new(MemoryStore::new());
        let user = add_user(&store, "owner@example.com").await;
        let missing = MovieId::from_raw(7);

        let result = UpdateMovieUseCase::new(store.clone())
            .execute(missing, movie("Avatar", "Sci-Fi"), &user)
            .await;
        assert!(matches!(result, Err(CatalogError::MovieNotFound(_))));

        let result = DeleteMovieUseCase::new(store).execute(missing, &user).await;
        assert!(matches!(result, Err(CatalogError::MovieNotFound(_))));
    }

    #[tokio::test]
    async fn test_non_owner_cannot_modify() {
        let store = Arc::new(MemoryStore::new());
        let owner = add_user(&store, "owner@example.com").await;
        let stranger = add_user(&store, "stranger@example.com").await;
        let created = CreateMovieUseCase::new(store.clone())
            .execute(movie("Avatar", "Sci-Fi"), &owner)
            .await
            .unwrap();

        let result = UpdateMovieUseCase::new(store.clone())
            .execute(created.movie.id, movie("Hijacked", "Sci-Fi"), &stranger)
            .await;
        assert!(matches!(
            result,
            Err(CatalogError::Auth(AuthError::Forbidden))
        ));

        let result = DeleteMovieUseCase::new(store.clone())
            .execute(created.movie.id, &stranger)
            .await;
        assert!(matches!(
            result,
            Err(CatalogError::Auth(AuthError::Forbidden))
        ));

        let unchanged = Repository::<Movie>::get_by_id(&*store, created.movie.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(unchanged.title, "Avatar");
    }

    #[tokio::test]
    async fn test_delete_by_owner() {
        let store = Arc::new(MemoryStore::new());
        let user = add_user(&store, "owner@example.com").await;
        let created = CreateMovieUseCase::new(store.clone())
            .execute(movie("Avatar", "Sci-Fi"), &user)
            .await
            .unwrap();

        DeleteMovieUseCase::new(store.clone())
            .execute(created.movie.id, &user)
            .await
            .unwrap();

        let gone = Repository::<Movie>::get_by_id(&*store, created.movie.id)
            .await
            .unwrap();
        assert!(gone.is_none());
    }

    #[tokio::test]
    async fn test_list_genre_filter_is_case_sensitive() {
        let store = Arc::new(MemoryStore::new());
        let user = add_user(&store, "owner@example.com").await;
        let create = CreateMovieUseCase::new(store.clone());
        create.execute(movie("Heat", "Action"), &user).await.unwrap();
        create.execute(movie("Up", "Animation"), &user).await.unwrap();
        create
            .execute(movie("Speed", "Action Thriller"), &user)
            .await
            .unwrap();

        let list = ListMoviesUseCase::new(store);
        let query = |search: &str| MovieQuery {
            search: search.to_string(),
            ..Default::default()
        };

        let found = list.execute(query("Action")).await.unwrap();
        let titles: Vec<_> = found.iter().map(|m| m.movie.title.as_str()).collect();
        assert_eq!(titles, ["Heat", "Speed"]);

        assert!(list.execute(query("action")).await.unwrap().is_empty());
        assert_eq!(list.execute(query("")).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_list_pagination() {
        let store = Arc::new(MemoryStore::new());
        let user = add_user(&store, "owner@example.com").await;
        let create = CreateMovieUseCase::new(store.clone());
        for title in ["A", "B", "C", "D"] {
            create.execute(movie(title, "Drama"), &user).await.unwrap();
        }

        let list = ListMoviesUseCase::new(store);
        let page = list
            .execute(MovieQuery {
                limit: 2,
                skip: 1,
                ..Default::default()
            })
            .await
            .unwrap();
        let titles: Vec<_> = page.iter().map(|m| m.movie.title.as_str()).collect();
        assert_eq!(titles, ["B", "C"]);

        let result = list
            .execute(MovieQuery {
                skip: -1,
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }
}

#[cfg(test)]
mod rating_and_comment_tests {
    use std::sync::Arc;

    use auth::User;
    use kernel::id::{CommentId, MovieId};
    use kernel::repository::Repository;

    use super::support::*;
    use crate::application::{
        CommentMovieUseCase, CreateMovieUseCase, DeleteMovieUseCase, GetMovieCommentsUseCase,
        GetMovieRatingsUseCase, RateMovieUseCase, ReplyCommentUseCase,
    };
    use crate::domain::entities::{
        Comment, CommentFields, Movie, Rating, RatingFields, Reply, ReplyFields,
    };
    use crate::error::CatalogError;
    use crate::infra::memory::MemoryStore;

    fn rating(movie_id: MovieId, value: f64) -> RatingFields {
        RatingFields {
            movie_id,
            rating: value,
        }
    }

    fn comment(movie_id: MovieId, content: &str) -> CommentFields {
        CommentFields {
            movie_id,
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn test_rate_once_per_user() {
        let store = Arc::new(MemoryStore::new());
        let user = add_user(&store, "rater@example.com").await;
        let other = add_user(&store, "other@example.com").await;
        let created = CreateMovieUseCase::new(store.clone())
            .execute(movie("Avatar", "Sci-Fi"), &user)
            .await
            .unwrap();
        let rate = RateMovieUseCase::new(store.clone(), store.clone());

        let rated = rate
            .execute(rating(created.movie.id, 4.5), &user)
            .await
            .unwrap();
        assert_eq!(rated.rating.rating, 4.5);
        assert_eq!(rated.movie, created);
        assert_eq!(
            Repository::<Rating>::get_by_id(&*store, rated.rating.id)
                .await
                .unwrap(),
            Some(rated.rating.clone())
        );

        let again = rate.execute(rating(created.movie.id, 1.0), &user).await;
        assert!(matches!(again, Err(CatalogError::DuplicateRating)));

        rate.execute(rating(created.movie.id, 3.0), &other)
            .await
            .unwrap();

        let with_ratings = GetMovieRatingsUseCase::new(store)
            .execute(created.movie.id)
            .await
            .unwrap();
        let values: Vec<f64> = with_ratings.ratings.iter().map(|r| r.rating).collect();
        assert_eq!(values, [4.5, 3.0]);
    }

    #[tokio::test]
    async fn test_rate_missing_movie() {
        let store = Arc::new(MemoryStore::new());
        let user = add_user(&store, "rater@example.com").await;

        let result = RateMovieUseCase::new(store.clone(), store)
            .execute(rating(MovieId::from_raw(9), 5.0), &user)
            .await;
        assert!(matches!(result, Err(CatalogError::MovieNotFound(_))));
    }

    #[tokio::test]
    async fn test_ratings_of_unrated_movie_are_empty() {
        let store = Arc::new(MemoryStore::new());
        let user = add_user(&store, "owner@example.com").await;
        let created = CreateMovieUseCase::new(store.clone())
            .execute(movie("Avatar", "Sci-Fi"), &user)
            .await
            .unwrap();

        let with_ratings = GetMovieRatingsUseCase::new(store.clone())
            .execute(created.movie.id)
            .await
            .unwrap();
        assert!(with_ratings.ratings.is_empty());

        let result = GetMovieCommentsUseCase::new(store)
            .execute(MovieId::from_raw(99))
            .await;
        assert!(matches!(result, Err(CatalogError::MovieNotFound(_))));
    }

    #[tokio::test]
    async fn test_comment_and_reply() {
        let store = Arc::new(MemoryStore::new());
        let user = add_user(&store, "critic@example.com").await;
        let created = CreateMovieUseCase::new(store.clone())
            .execute(movie("Avatar", "Sci-Fi"), &user)
            .await
            .unwrap();

        let posted = CommentMovieUseCase::new(store.clone(), store.clone())
            .execute(comment(created.movie.id, "Great visuals"), &user)
            .await
            .unwrap();
        assert_eq!(posted.comment.movie_id, created.movie.id);
        assert_eq!(posted.movie, created);
        assert_eq!(
            Repository::<Comment>::get_by_id(&*store, posted.comment.id)
                .await
                .unwrap(),
            Some(posted.comment.clone())
        );

        let reply = ReplyCommentUseCase::new(store.clone(), store.clone())
            .execute(
                ReplyFields {
                    comment_id: posted.comment.id,
                    reply: "Agreed".to_string(),
                },
                &user,
            )
            .await
            .unwrap();
        assert_eq!(reply.comment_id, posted.comment.id);
        assert_eq!(reply.reply, "Agreed");
        assert_eq!(
            Repository::<Reply>::get_by_id(&*store, reply.id).await.unwrap(),
            Some(reply.clone())
        );

        let with_comments = GetMovieCommentsUseCase::new(store)
            .execute(created.movie.id)
            .await
            .unwrap();
        assert_eq!(with_comments.comments, vec![posted.comment]);
    }

    #[tokio::test]
    async fn test_reply_to_missing_comment() {
        let store = Arc::new(MemoryStore::new());
        let user = add_user(&store, "critic@example.com").await;

        let result = ReplyCommentUseCase::new(store.clone(), store)
            .execute(
                ReplyFields {
                    comment_id: CommentId::from_raw(5),
                    reply: "Hello?".to_string(),
                },
                &user,
            )
            .await;
        assert!(
            matches!(result, Err(CatalogError::CommentNotFound(id)) if id.get() == 5)
        );
    }

    #[tokio::test]
    async fn test_movie_delete_cascades() {
        let store = Arc::new(MemoryStore::new());
        let user = add_user(&store, "owner@example.com").await;
        let created = CreateMovieUseCase::new(store.clone())
            .execute(movie("Avatar", "Sci-Fi"), &user)
            .await
            .unwrap();
        let rated = RateMovieUseCase::new(store.clone(), store.clone())
            .execute(rating(created.movie.id, 5.0), &user)
            .await
            .unwrap();
        let posted = CommentMovieUseCase::new(store.clone(), store.clone())
            .execute(comment(created.movie.id, "Nice"), &user)
            .await
            .unwrap();
        let reply = ReplyCommentUseCase::new(store.clone(), store.clone())
            .execute(
                ReplyFields {
                    comment_id: posted.comment.id,
                    reply: "Thanks".to_string(),
                },
                &user,
            )
            .await
            .unwrap();

        DeleteMovieUseCase::new(store.clone())
            .execute(created.movie.id, &user)
            .await
            .unwrap();

        let store = &*store;
        assert!(Repository::<Rating>::get_by_id(store, rated.rating.id).await.unwrap().is_none());
        assert!(Repository::<Comment>::get_by_id(store, posted.comment.id).await.unwrap().is_none());
        assert!(Repository::<Reply>::get_by_id(store, reply.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_user_delete_cascades() {
        let store = Arc::new(MemoryStore::new());
        let owner = add_user(&store, "owner@example.com").await;
        let critic = add_user(&store, "critic@example.com").await;
        let owned = CreateMovieUseCase::new(store.clone())
            .execute(movie("Avatar", "Sci-Fi"), &owner)
            .await
            .unwrap();
        let others = CreateMovieUseCase::new(store.clone())
            .execute(movie("Heat", "Action"), &critic)
            .await
            .unwrap();
        let rated = RateMovieUseCase::new(store.clone(), store.clone())
            .execute(rating(others.movie.id, 2.0), &owner)
            .await
            .unwrap();
        let comment_movie = CommentMovieUseCase::new(store.clone(), store.clone());
        let critic_comment = comment_movie
            .execute(comment(owned.movie.id, "Meh"), &critic)
            .await
            .unwrap();
        let owner_comment = comment_movie
            .execute(comment(others.movie.id, "Too long"), &owner)
            .await
            .unwrap();
        let kept_comment = comment_movie
            .execute(comment(others.movie.id, "Classic"), &critic)
            .await
            .unwrap();
        let owner_reply = ReplyCommentUseCase::new(store.clone(), store.clone())
            .execute(
                ReplyFields {
                    comment_id: kept_comment.comment.id,
                    reply: "Overrated".to_string(),
                },
                &owner,
            )
            .await
            .unwrap();

        assert_eq!(
            Repository::<User>::delete(&*store, owner.id).await.unwrap(),
            1
        );

        let store = &*store;
        assert!(Repository::<User>::get_by_id(store, owner.id).await.unwrap().is_none());
        assert!(Repository::<Movie>::get_by_id(store, owned.movie.id).await.unwrap().is_none());
        assert!(Repository::<Rating>::get_by_id(store, rated.rating.id).await.unwrap().is_none());
        // Comment by someone else, but on a movie that went away
        assert!(
            Repository::<Comment>::get_by_id(store, critic_comment.comment.id)
                .await
                .unwrap()
                .is_none()
        );
        // Written by the deleted user on a movie that stays
        assert!(
            Repository::<Comment>::get_by_id(store, owner_comment.comment.id)
                .await
                .unwrap()
                .is_none()
        );
        // Written by the deleted user under a comment that stays
        assert!(Repository::<Reply>::get_by_id(store, owner_reply.id).await.unwrap().is_none());

        assert!(Repository::<Movie>::get_by_id(store, others.movie.id).await.unwrap().is_some());
        assert_eq!(
            Repository::<Comment>::get_by_id(store, kept_comment.comment.id)
                .await
                .unwrap(),
            Some(kept_comment.comment)
        );
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use auth::{AuthConfig, AuthGuard, CurrentUser, TokenService};
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use platform::bearer::bearer_header_value;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::support::*;
    use crate::infra::memory::MemoryStore;
    use crate::presentation::router::catalog_router_generic;

    struct TestApp {
        router: Router,
        tokens: Arc<TokenService>,
    }

    impl TestApp {
        fn new(store: Arc<MemoryStore>) -> Self {
            let tokens = Arc::new(TokenService::new(&AuthConfig::default()));
            let guard = AuthGuard::new(store.clone(), tokens.clone());
            Self {
                router: catalog_router_generic(store, guard),
                tokens,
            }
        }

        fn bearer(&self, user: &CurrentUser) -> String {
            bearer_header_value(&self.tokens.issue(user.id).unwrap())
        }

        async fn send(
            &self,
            method: Method,
            uri: &str,
            auth: Option<String>,
            body: Option<Value>,
        ) -> (StatusCode, Value) {
            let mut builder = Request::builder().method(method).uri(uri);
            if let Some(auth) = auth {
                builder = builder.header(header::AUTHORIZATION, auth);
            }
            let body = match body {
                Some(json) => {
                    builder = builder.header(header::CONTENT_TYPE, "application/json");
                    Body::from(json.to_string())
                }
                None => Body::empty(),
            };

            let response = self
                .router
                .clone()
                .oneshot(builder.body(body).unwrap())
                .await
                .unwrap();
            let status = response.status();
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let json = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).unwrap()
            };
            (status, json)
        }
    }

    fn avatar() -> Value {
        json!({ "title": "Avatar", "genre": "Sci-Fi", "director": "James Cameron" })
    }

    #[tokio::test]
    async fn test_writes_require_token() {
        let app = TestApp::new(Arc::new(MemoryStore::new()));

        let (status, body) = app
            .send(Method::POST, "/movies", None, Some(avatar()))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["detail"], "Not authenticated");

        let (status, body) = app.send(Method::GET, "/movies", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_movie_lifecycle() {
        let store = Arc::new(MemoryStore::new());
        let owner = add_user(&store, "jengreat94@gmail.com").await;
        let stranger = add_user(&store, "stranger@example.com").await;
        let app = TestApp::new(store);

        let (status, created) = app
            .send(Method::POST, "/movies", Some(app.bearer(&owner)), Some(avatar()))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["title"], "Avatar");
        assert_eq!(created["user"]["email"], "jengreat94@gmail.com");
        let uri = format!("/movies/{}", created["id"]);

        let (status, fetched) = app.send(Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let changed = json!({ "title": "Avatar 2", "genre": "Sci-Fi", "director": "James Cameron" });
        let (status, body) = app
            .send(Method::PUT, &uri, Some(app.bearer(&stranger)), Some(changed.clone()))
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["detail"], "Not authorized to perform requested action");

        let (status, updated) = app
            .send(Method::PUT, &uri, Some(app.bearer(&owner)), Some(changed))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["title"], "Avatar 2");

        let (status, _) = app
            .send(Method::DELETE, &uri, Some(app.bearer(&owner)), None)
            .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = app.send(Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["detail"],
            format!("Movie with id:{} not found", created["id"])
        );
    }

    #[tokio::test]
    async fn test_ratings_comments_and_replies() {
        let store = Arc::new(MemoryStore::new());
        let user = add_user(&store, "critic@example.com").await;
        let app = TestApp::new(store);
        let auth = || Some(app.bearer(&user));

        let (_, created) = app
            .send(Method::POST, "/movies", auth(), Some(avatar()))
            .await;
        let movie_id = created["id"].clone();

        let (status, rated) = app
            .send(
                Method::POST,
                "/ratings",
                auth(),
                Some(json!({ "movie_id": movie_id, "rating": 4.5 })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(rated["rating"], 4.5);
        assert_eq!(rated["movie"]["id"], movie_id);

        let (status, body) = app
            .send(
                Method::POST,
                "/ratings",
                auth(),
                Some(json!({ "movie_id": movie_id, "rating": 2.0 })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "User has already rated this movie");

        let (status, ratings) = app
            .send(Method::GET, &format!("/ratings/{movie_id}"), None, None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ratings["ratings"].as_array().unwrap().len(), 1);

        let (status, commented) = app
            .send(
                Method::POST,
                "/comments",
                auth(),
                Some(json!({ "movie_id": movie_id, "content": "Loved it" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(commented["content"], "Loved it");

        let (status, reply) = app
            .send(
                Method::POST,
                "/replies",
                auth(),
                Some(json!({ "comment_id": commented["id"], "content": "Same" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(reply["reply"], "Same");
        assert_eq!(reply["comment_id"], commented["id"]);

        let (status, body) = app
            .send(
                Method::POST,
                "/replies",
                auth(),
                Some(json!({ "comment_id": 999, "content": "Anyone?" })),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Comment with id:999 not found");

        let (status, comments) = app
            .send(Method::GET, &format!("/comments/{movie_id}"), None, None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(comments["comments"][0]["content"], "Loved it");
    }

    #[tokio::test]
    async fn test_list_query_defaults_and_search() {
        let store = Arc::new(MemoryStore::new());
        let user = add_user(&store, "owner@example.com").await;
        let app = TestApp::new(store);

        for (title, genre) in [("Heat", "Action"), ("Up", "Animation")] {
            app.send(
                Method::POST,
                "/movies",
                Some(app.bearer(&user)),
                Some(json!({ "title": title, "genre": genre, "director": "Someone" })),
            )
            .await;
        }

        let (_, all) = app.send(Method::GET, "/movies", None, None).await;
        assert_eq!(all.as_array().unwrap().len(), 2);

        let (_, found) = app
            .send(Method::GET, "/movies?search=Anim&limit=5", None, None)
            .await;
        assert_eq!(found.as_array().unwrap().len(), 1);
        assert_eq!(found[0]["title"], "Up");

        let (status, _) = app
            .send(Method::GET, "/movies?limit=-1", None, None)
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_malformed_input_renders_problem_json() {
        let store = Arc::new(MemoryStore::new());
        let user = add_user(&store, "owner@example.com").await;
        let app = TestApp::new(store);

        let (status, body) = app
            .send(
                Method::POST,
                "/movies",
                Some(app.bearer(&user)),
                Some(json!({ "title": "Avatar", "genre": "Sci-Fi" })),
            )
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["status"], 422);
        assert_eq!(body["title"], "Unprocessable Entity");
        assert!(body["detail"].as_str().unwrap().contains("director"));

        for uri in ["/movies/abc", "/movies/99999999999", "/ratings/abc"] {
            let (status, body) = app.send(Method::GET, uri, None, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["status"], 400, "{uri}");
            assert!(body["detail"].as_str().is_some_and(|d| !d.is_empty()), "{uri}");
        }

        let (status, body) = app
            .send(Method::GET, "/movies?limit=abc", None, None)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["title"], "Bad Request");
    }
}
