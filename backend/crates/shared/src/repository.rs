//! Generic Repository Contract
//!
//! Every table-backed entity implements [`Record`]; every store implements
//! the CRUD traits once per entity. Entity-specific repositories (movies,
//! ratings, users, ...) extend these with their own lookups, so callers keep
//! compile-time checking of field types instead of passing table names around.
//!
//! All mutating operations are single statements that commit before
//! returning: a successful `create`/`update`/`delete` is immediately
//! visible to a following `get_by_id`.

use crate::error::app_error::AppResult;
use crate::id::{Id, UserId};

/// A row stored in a table with a server-generated integer key
pub trait Record: Send + Sync + Sized {
    /// Id marker (`kernel::id::markers::*`)
    type Marker: Send + Sync;
    /// Caller-supplied columns for an insert (everything except id, owner
    /// and timestamps)
    type Fields: Send + Sync;

    /// Table name, used in log fields
    const TABLE: &'static str;

    fn id(&self) -> Id<Self::Marker>;
}

/// A row owned by a user through its `user_id` column
pub trait Owned: Record {
    fn owner_id(&self) -> UserId;
}

/// A row that supports partial updates
pub trait Patchable: Record {
    type Changes: Send + Sync;
}

/// Read and delete by id
#[trait_variant::make(Repository: Send)]
pub trait LocalRepository<R: Record> {
    /// Point lookup; `Ok(None)` when the row does not exist
    async fn get_by_id(&self, id: Id<R::Marker>) -> AppResult<Option<R>>;

    /// Delete the row (dependent rows go with it through FK cascades).
    ///
    /// Returns the number of rows affected; `0` means the id did not exist.
    /// Translating that into a not-found outcome is the caller's job.
    async fn delete(&self, id: Id<R::Marker>) -> AppResult<u64>;
}

/// Ownership-scoped creation
#[trait_variant::make(OwnedRepository: Send)]
pub trait LocalOwnedRepository<R: Owned> {
    /// Insert a row stamped with `owner` and return it fully materialized
    /// (generated id and `created_at` included)
    async fn create(&self, fields: &R::Fields, owner: UserId) -> AppResult<R>;
}

/// Partial update by id
#[trait_variant::make(PatchRepository: Send)]
pub trait LocalPatchRepository<R: Patchable> {
    /// Apply `changes`; returns rows affected (`0` when the id is unknown)
    async fn update(&self, id: Id<R::Marker>, changes: &R::Changes) -> AppResult<u64>;
}
