//! Derived author/book relationships.
//!
//! Nothing here is stored: each call scans the relevant collection. Both
//! scans are O(n) in the size of the scanned collection.

use crate::store::EntityStore;
use crate::types::{Author, AuthorId, Book};

/// All books whose `author_id` equals `author_id`, in insertion order.
///
/// Returns an empty list when the author has no books or does not exist.
#[must_use]
pub fn books_by_author(store: &EntityStore, author_id: AuthorId) -> Vec<Book> {
    store
        .books()
        .filter(|book| book.is_by(author_id))
        .cloned()
        .collect()
}

/// The author referenced by `book`, or `None` if the reference dangles.
///
/// Author IDs are unique, so at most one author can match.
#[must_use]
pub fn author_of_book(store: &EntityStore, book: &Book) -> Option<Author> {
    store
        .authors()
        .find(|author| author.id == book.author_id)
        .cloned()
}
