//! Catalog Backend Module
//!
//! Movies plus the ratings, comments and replies users attach to them.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and repository traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory stores
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Authorization
//! - Reads are public
//! - Creating anything requires a bearer token; the row is stamped with the
//!   acting user
//! - Updating or deleting a movie is restricted to its owner
//! - A user rates a given movie at most once

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::entities::{
    Comment, Movie, MovieFields, MovieQuery, MovieWithComments, MovieWithOwner, MovieWithRatings,
    Rating, Reply,
};
pub use domain::repository::CatalogRepository;
pub use error::{CatalogError, CatalogResult};
pub use infra::{MemoryStore, PgCatalogRepository};
pub use presentation::router::{catalog_router, catalog_router_generic};

#[cfg(test)]
mod tests;
