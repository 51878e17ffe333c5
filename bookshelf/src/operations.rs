//! The operation surface: the six named queries and mutations.
//!
//! `Library` is the only way callers reach the entity store. It checks
//! inputs before any mutation, takes the store lock for exactly one
//! operation, and logs what it did.
//!
//! # Thread Safety
//!
//! The store lives behind an `RwLock`: lookups and listings share the lock,
//! inserts hold it exclusively. Id assignment is therefore serialized even
//! when the HTTP layer runs requests in parallel.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::store::{self, EntityStore, StoreError};
use crate::types::{Author, AuthorId, Book, BookId};

/// Rejected operation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required name was empty or whitespace only.
    EmptyName { field: &'static str },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName { field } => write!(f, "{field} must not be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors returned by [`Library`] operations.
#[derive(Debug)]
pub enum LibraryError {
    /// The caller's input was invalid; the store was not touched.
    Validation(ValidationError),
    /// The store refused the insert.
    Store(StoreError),
    /// A thread panicked while holding the store lock.
    LockPoisoned,
}

impl std::fmt::Display for LibraryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "validation error: {e}"),
            Self::Store(e) => write!(f, "store error: {e}"),
            Self::LockPoisoned => write!(f, "entity store lock poisoned"),
        }
    }
}

impl std::error::Error for LibraryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Store(e) => Some(e),
            Self::LockPoisoned => None,
        }
    }
}

impl From<ValidationError> for LibraryError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for LibraryError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

/// Check that a required name is present.
fn require_name(field: &'static str, name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName { field });
    }
    Ok(())
}

/// Shared handle to the entity store exposing the query and mutation
/// operations.
///
/// Cloning is cheap; every clone sees the same collections.
#[derive(Debug, Clone, Default)]
pub struct Library {
    store: Arc<RwLock<EntityStore>>,
}

impl Library {
    /// Wrap an existing store.
    #[must_use]
    pub fn new(store: EntityStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// A library holding the sample authors and books.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(EntityStore::seeded())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, EntityStore>, LibraryError> {
        self.store.read().map_err(|_| LibraryError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, EntityStore>, LibraryError> {
        self.store.write().map_err(|_| LibraryError::LockPoisoned)
    }

    /// Look up a single author.
    ///
    /// An omitted `id` matches no author.
    pub fn author(&self, id: Option<AuthorId>) -> Result<Option<Author>, LibraryError> {
        let Some(id) = id else {
            tracing::debug!("author lookup without id");
            return Ok(None);
        };
        let author = self.read()?.get_author_by_id(id).cloned();
        tracing::debug!(%id, found = author.is_some(), "author lookup");
        Ok(author)
    }

    /// Look up a single book.
    ///
    /// An omitted `id` matches no book.
    pub fn book(&self, id: Option<BookId>) -> Result<Option<Book>, LibraryError> {
        let Some(id) = id else {
            tracing::debug!("book lookup without id");
            return Ok(None);
        };
        let book = self.read()?.get_book_by_id(id).cloned();
        tracing::debug!(%id, found = book.is_some(), "book lookup");
        Ok(book)
    }

    /// All books in insertion order.
    pub fn books(&self) -> Result<Vec<Book>, LibraryError> {
        Ok(self.read()?.list_books())
    }

    /// All authors in insertion order.
    pub fn authors(&self) -> Result<Vec<Author>, LibraryError> {
        Ok(self.read()?.list_authors())
    }

    /// Books written by `author_id`, in insertion order.
    pub fn books_by_author(&self, author_id: AuthorId) -> Result<Vec<Book>, LibraryError> {
        let store = self.read()?;
        Ok(store::books_by_author(&store, author_id))
    }

    /// The author of `book`, or `None` if its author does not exist.
    pub fn author_of_book(&self, book: &Book) -> Result<Option<Author>, LibraryError> {
        let store = self.read()?;
        let author = store::author_of_book(&store, book);
        if author.is_none() {
            tracing::debug!(book_id = %book.id, author_id = %book.author_id, "dangling author reference");
        }
        Ok(author)
    }

    /// Add a book.
    ///
    /// `author_id` is not checked against the existing authors.
    pub fn add_book(&self, name: &str, author_id: AuthorId) -> Result<Book, LibraryError> {
        if let Err(e) = require_name("name", name) {
            tracing::warn!("rejected addBook: {e}");
            return Err(e.into());
        }
        let book = self.write()?.insert_book(name, author_id)?;
        tracing::info!(id = %book.id, author_id = %book.author_id, "added book '{}'", book.name);
        Ok(book)
    }

    /// Add an author.
    pub fn add_author(&self, name: &str) -> Result<Author, LibraryError> {
        if let Err(e) = require_name("name", name) {
            tracing::warn!("rejected addAuthor: {e}");
            return Err(e.into());
        }
        let author = self.write()?.insert_author(name)?;
        tracing::info!(id = %author.id, "added author '{}'", author.name);
        Ok(author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_lookup() {
        let library = Library::seeded();
        let author = library.author(Some(AuthorId(2))).unwrap().unwrap();
        assert_eq!(author.name, "sam");
        assert!(library.author(Some(AuthorId(99))).unwrap().is_none());
    }

    #[test]
    fn test_omitted_id_matches_nothing() {
        let library = Library::seeded();
        assert!(library.author(None).unwrap().is_none());
        assert!(library.book(None).unwrap().is_none());
    }

    #[test]
    fn test_book_lookup() {
        let library = Library::seeded();
        let book = library.book(Some(BookId(4))).unwrap().unwrap();
        assert_eq!(book.name, "book4");
        assert_eq!(book.author_id, AuthorId(3));
        assert!(library.book(Some(BookId(0))).unwrap().is_none());
    }

    #[test]
    fn test_add_author_on_seed() {
        let library = Library::seeded();
        let author = library.add_author("alex").unwrap();
        assert_eq!(author, Author::new(AuthorId(4), "alex".to_string()));
        assert_eq!(library.authors().unwrap().len(), 4);
    }

    #[test]
    fn test_add_book_then_relations() {
        let library = Library::new(EntityStore::new());
        library.add_author("bob").unwrap();
        library.add_author("sam").unwrap();

        let book = library.add_book("book1", AuthorId(2)).unwrap();
        assert_eq!(book, Book::new(BookId(1), "book1".to_string(), AuthorId(2)));
        assert_eq!(library.books_by_author(AuthorId(2)).unwrap(), [book.clone()]);
        assert!(library.books_by_author(AuthorId(1)).unwrap().is_empty());
        assert_eq!(
            library.author_of_book(&book).unwrap().map(|a| a.name),
            Some("sam".to_string())
        );
    }

    #[test]
    fn test_relations_on_seed() {
        let library = Library::seeded();
        let names: Vec<_> = library
            .books_by_author(AuthorId(2))
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, ["book1", "book3"]);

        let book = library.book(Some(BookId(2))).unwrap().unwrap();
        let author = library.author_of_book(&book).unwrap().unwrap();
        assert_eq!(author, Author::new(AuthorId(1), "bob".to_string()));
    }

    #[test]
    fn test_add_book_with_dangling_author() {
        let library = Library::seeded();
        let book = library.add_book("orphan", AuthorId(999)).unwrap();
        assert_eq!(book.id, BookId(5));
        assert!(library.author_of_book(&book).unwrap().is_none());
    }

    #[test]
    fn test_empty_names_are_rejected_without_mutation() {
        let library = Library::seeded();
        for name in ["", "   ", "\t\n"] {
            let err = library.add_author(name).unwrap_err();
            assert!(matches!(
                err,
                LibraryError::Validation(ValidationError::EmptyName { field: "name" })
            ));
            let err = library.add_book(name, AuthorId(1)).unwrap_err();
            assert!(matches!(err, LibraryError::Validation(_)));
        }
        assert_eq!(library.authors().unwrap().len(), 3);
        assert_eq!(library.books().unwrap().len(), 4);

        // The sequence did not advance on rejected input.
        assert_eq!(library.add_author("alex").unwrap().id, AuthorId(4));
    }

    #[test]
    fn test_clones_share_state() {
        let library = Library::seeded();
        let other = library.clone();
        other.add_author("alex").unwrap();
        assert_eq!(library.authors().unwrap().len(), 4);
    }

    #[test]
    fn test_concurrent_adds_get_unique_ids() {
        let library = Library::new(EntityStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let library = library.clone();
                std::thread::spawn(move || {
                    (0..25)
                        .map(|j| library.add_author(&format!("author-{i}-{j}")).unwrap().id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<AuthorId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort();
        let expected: Vec<AuthorId> = (1..=200).map(AuthorId).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_error_display() {
        let err = LibraryError::from(ValidationError::EmptyName { field: "name" });
        assert_eq!(err.to_string(), "validation error: name must not be empty");
        assert_eq!(
            LibraryError::LockPoisoned.to_string(),
            "entity store lock poisoned"
        );
    }
}
