//! In-memory entity store for authors and books.
//!
//! The store owns two ordered `id -> record` maps and one [`IdSequence`] per
//! collection. It performs no validation of its own: names are checked by the
//! operation surface before they reach the store, and a book's `author_id` is
//! never checked against the author collection.
//!
//! # Invariants
//!
//! - IDs within a collection are unique and assigned as `size + 1`.
//! - Iteration order equals insertion order, because IDs only increase and
//!   the maps are ordered by ID.
//! - Records are never updated or removed.

pub mod relations;
mod sequence;

use std::collections::BTreeMap;

pub use relations::{author_of_book, books_by_author};
pub use sequence::IdSequence;

use crate::types::{Author, AuthorId, Book, BookId};

/// Seed authors, in insertion order.
const SEED_AUTHORS: [&str; 3] = ["bob", "sam", "joe"];

/// Seed books as `(name, author_id)`, in insertion order.
const SEED_BOOKS: [(&str, i32); 4] = [("book1", 2), ("book2", 1), ("book3", 2), ("book4", 3)];

/// Errors raised by the entity store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// The collection has already issued `i32::MAX` IDs.
    IdSpaceExhausted { collection: &'static str },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdSpaceExhausted { collection } => {
                write!(f, "no more ids available for {collection}")
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Holder of the author and book collections.
#[derive(Debug, Default)]
pub struct EntityStore {
    authors: BTreeMap<AuthorId, Author>,
    books: BTreeMap<BookId, Book>,
    author_ids: IdSequence,
    book_ids: IdSequence,
}

impl EntityStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the sample library: three authors and four
    /// books, with IDs 1..=3 and 1..=4 respectively.
    #[must_use]
    pub fn seeded() -> Self {
        let mut store = Self::new();
        if let Err(e) = store.load_seed() {
            tracing::error!("Failed to load seed data: {e}");
        }
        store
    }

    /// Append the sample authors and books to this store.
    pub fn load_seed(&mut self) -> Result<(), StoreError> {
        for name in SEED_AUTHORS {
            self.insert_author(name)?;
        }
        for (name, author_id) in SEED_BOOKS {
            self.insert_book(name, AuthorId(author_id))?;
        }
        Ok(())
    }

    /// Append a new author and return it.
    ///
    /// The new ID is `author_count() + 1`.
    pub fn insert_author(&mut self, name: impl Into<String>) -> Result<Author, StoreError> {
        let id = self
            .author_ids
            .next_id()
            .ok_or(StoreError::IdSpaceExhausted {
                collection: "authors",
            })?;
        let author = Author::new(AuthorId(id), name.into());
        self.authors.insert(author.id, author.clone());

        debug_assert_eq!(
            i64::from(self.author_ids.last()),
            i64::try_from(self.authors.len()).unwrap_or(i64::MAX),
            "author sequence must track the collection size"
        );

        Ok(author)
    }

    /// Append a new book and return it.
    ///
    /// `author_id` is stored as given, even if no such author exists.
    pub fn insert_book(
        &mut self,
        name: impl Into<String>,
        author_id: AuthorId,
    ) -> Result<Book, StoreError> {
        let id = self
            .book_ids
            .next_id()
            .ok_or(StoreError::IdSpaceExhausted {
                collection: "books",
            })?;
        let book = Book::new(BookId(id), name.into(), author_id);
        self.books.insert(book.id, book.clone());

        debug_assert_eq!(
            i64::from(self.book_ids.last()),
            i64::try_from(self.books.len()).unwrap_or(i64::MAX),
            "book sequence must track the collection size"
        );

        Ok(book)
    }

    /// Look up an author by ID.
    #[must_use]
    pub fn get_author_by_id(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(&id)
    }

    /// Look up a book by ID.
    #[must_use]
    pub fn get_book_by_id(&self, id: BookId) -> Option<&Book> {
        self.books.get(&id)
    }

    /// Iterate over all authors in insertion order.
    pub fn authors(&self) -> impl Iterator<Item = &Author> {
        self.authors.values()
    }

    /// Iterate over all books in insertion order.
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    /// Snapshot of all authors in insertion order.
    #[must_use]
    pub fn list_authors(&self) -> Vec<Author> {
        self.authors().cloned().collect()
    }

    /// Snapshot of all books in insertion order.
    #[must_use]
    pub fn list_books(&self) -> Vec<Book> {
        self.books().cloned().collect()
    }

    /// Number of authors.
    #[must_use]
    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    /// Number of books.
    #[must_use]
    pub fn book_count(&self) -> usize {
        self.books.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = EntityStore::new();
        assert_eq!(store.author_count(), 0);
        assert_eq!(store.book_count(), 0);
        assert!(store.list_authors().is_empty());
        assert!(store.list_books().is_empty());
    }

    #[test]
    fn test_insert_author_assigns_increasing_ids() {
        let mut store = EntityStore::new();
        let mut previous = Vec::new();
        for name in ["a", "b", "c", "d", "e"] {
            let author = store.insert_author(name).unwrap();
            assert!(previous.iter().all(|id| author.id > *id));
            previous.push(author.id);
        }
        assert_eq!(store.author_count(), 5);
    }

    #[test]
    fn test_insert_author_id_is_size_plus_one() {
        let mut store = EntityStore::seeded();
        let author = store.insert_author("alex").unwrap();
        assert_eq!(author, Author::new(AuthorId(4), "alex".to_string()));
        assert_eq!(store.get_author_by_id(AuthorId(4)), Some(&author));
    }

    #[test]
    fn test_insert_book_scenario() {
        let mut store = EntityStore::new();
        store.insert_author("bob").unwrap();
        store.insert_author("sam").unwrap();

        let book = store.insert_book("book1", AuthorId(2)).unwrap();
        assert_eq!(book, Book::new(BookId(1), "book1".to_string(), AuthorId(2)));
        assert_eq!(store.get_book_by_id(BookId(1)), Some(&book));
    }

    #[test]
    fn test_insert_book_with_dangling_author() {
        let mut store = EntityStore::new();
        let book = store.insert_book("orphan", AuthorId(999)).unwrap();
        assert_eq!(book.author_id, AuthorId(999));
        assert_eq!(store.book_count(), 1);
    }

    #[test]
    fn test_lookup_missing_ids() {
        let store = EntityStore::seeded();
        assert!(store.get_author_by_id(AuthorId(0)).is_none());
        assert!(store.get_author_by_id(AuthorId(42)).is_none());
        assert!(store.get_book_by_id(BookId(-1)).is_none());
        assert!(store.get_book_by_id(BookId(5)).is_none());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = EntityStore::seeded();
        let names: Vec<_> = store.list_authors().into_iter().map(|a| a.name).collect();
        assert_eq!(names, ["bob", "sam", "joe"]);

        let books: Vec<_> = store
            .list_books()
            .into_iter()
            .map(|b| (b.id.get(), b.name, b.author_id.get()))
            .collect();
        assert_eq!(
            books,
            [
                (1, "book1".to_string(), 2),
                (2, "book2".to_string(), 1),
                (3, "book3".to_string(), 2),
                (4, "book4".to_string(), 3),
            ]
        );
    }

    #[test]
    fn test_list_is_idempotent() {
        let store = EntityStore::seeded();
        assert_eq!(store.list_authors(), store.list_authors());
        assert_eq!(store.list_books(), store.list_books());
    }

    #[test]
    fn test_list_reflects_later_inserts() {
        let mut store = EntityStore::seeded();
        let before = store.list_books();
        store.insert_book("book5", AuthorId(1)).unwrap();
        let after = store.list_books();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], &before[..]);
    }

    #[test]
    fn test_seeded_store_contents() {
        let store = EntityStore::seeded();
        assert_eq!(store.author_count(), 3);
        assert_eq!(store.book_count(), 4);
    }

    #[test]
    fn test_load_seed_reports_exhausted_ids() {
        let mut store = EntityStore {
            author_ids: IdSequence::starting_after(i32::MAX),
            ..EntityStore::default()
        };
        let err = store.load_seed().unwrap_err();
        assert_eq!(
            err,
            StoreError::IdSpaceExhausted {
                collection: "authors"
            }
        );
        assert_eq!(store.author_count(), 0);
        assert_eq!(store.book_count(), 0);
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::IdSpaceExhausted {
            collection: "books",
        };
        assert_eq!(err.to_string(), "no more ids available for books");
    }
}
