//! Book record.

use serde::{Deserialize, Serialize};

use crate::types::ids::{AuthorId, BookId};

/// A book as held by the entity store.
///
/// # Invariants
///
/// - `author_id` is advisory: it may name an author that does not exist.
///
/// The serde form matches the `Book` object in GraphQL responses, so JSON
/// returned by `/graphql` decodes straight back into this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Store-assigned identifier.
    pub id: BookId,
    /// Title of the book.
    pub name: String,
    /// The author this book refers to.
    pub author_id: AuthorId,
}

impl Book {
    /// Create a new book record.
    #[must_use]
    pub const fn new(id: BookId, name: String, author_id: AuthorId) -> Self {
        Self {
            id,
            name,
            author_id,
        }
    }

    /// Check whether this book was written by the given author.
    #[must_use]
    pub fn is_by(&self, author_id: AuthorId) -> bool {
        self.author_id == author_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_serializes_camel_case() {
        let book = Book::new(BookId(1), "book1".to_string(), AuthorId(2));
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "name": "book1", "authorId": 2 })
        );
    }

    #[test]
    fn test_book_is_by() {
        let book = Book::new(BookId(1), "book1".to_string(), AuthorId(2));
        assert!(book.is_by(AuthorId(2)));
        assert!(!book.is_by(AuthorId(1)));
    }
}
