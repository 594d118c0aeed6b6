//! Common ID Types
//!
//! Type-safe wrappers around the integer keys assigned by the store.

use std::fmt;
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// Row ids are generated by the database (`SERIAL`), so there is no
/// constructor that invents one; an `Id` is always read back from a row
/// or parsed from a request path.
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
/// let id = UserId::from_raw(7);
/// assert_eq!(id.get(), 7);
/// ```
pub struct Id<T> {
    value: i32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Wrap a raw key
    pub const fn from_raw(value: i32) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the raw key (for binding into queries)
    pub const fn get(&self) -> i32 {
        self.value
    }
}

// Manual impls: deriving would put bounds on the marker type.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i32> for Id<T> {
    fn from(value: i32) -> Self {
        Self::from_raw(value)
    }
}

impl<T> From<Id<T>> for i32 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User IDs
    pub struct User;

    /// Marker for Movie IDs
    pub struct Movie;

    /// Marker for Rating IDs
    pub struct Rating;

    /// Marker for Comment IDs
    pub struct Comment;

    /// Marker for Reply IDs
    pub struct Reply;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type MovieId = Id<markers::Movie>;
pub type RatingId = Id<markers::Rating>;
pub type CommentId = Id<markers::Comment>;
pub type ReplyId = Id<markers::Reply>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let user_id: UserId = Id::from_raw(1);
        let movie_id: MovieId = Id::from_raw(1);

        // Same raw value, different types; they can only be compared through i32
        assert_eq!(i32::from(user_id), i32::from(movie_id));
    }

    #[test]
    fn test_id_display() {
        let id = MovieId::from_raw(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(format!("{:?}", id), "Id(42)");
    }

    #[test]
    fn test_id_ordering() {
        let mut ids = vec![CommentId::from_raw(3), CommentId::from_raw(1)];
        ids.sort();
        assert_eq!(ids, vec![CommentId::from_raw(1), CommentId::from_raw(3)]);
    }
}
