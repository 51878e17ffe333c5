//! ID types for authors and books.
//!
//! This module provides newtype wrappers for author and book IDs so the two
//! sequences can never be mixed up, while still converting to and from the
//! plain integers used on the GraphQL wire.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A unique identifier for an author.
///
/// # Invariants
///
/// - IDs issued by the store are positive and strictly increasing.
/// - A value read from a client may be any integer; lookups with an
///   unknown ID simply find nothing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AuthorId(pub i32);

impl AuthorId {
    /// Get the underlying integer.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for AuthorId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<AuthorId> for i32 {
    fn from(id: AuthorId) -> Self {
        id.0
    }
}

/// A unique identifier for a book.
///
/// Same invariants as [`AuthorId`], drawn from a separate sequence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BookId(pub i32);

impl BookId {
    /// Get the underlying integer.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for BookId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<BookId> for i32 {
    fn from(id: BookId) -> Self {
        id.0
    }
}
