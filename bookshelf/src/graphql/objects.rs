//! GraphQL object types for authors and books.
//!
//! The records from [`crate::types`] are exposed directly. Scalar fields map
//! onto the record's fields; relation fields call back into the [`Library`]
//! held in the schema data.

use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::graphql::library;
use crate::types::{Author, Book};

/// An author of zero or more books
#[Object(name = "Author")]
impl Author {
    async fn id(&self) -> i32 {
        self.id.get()
    }

    async fn name(&self) -> &str {
        &self.name
    }

    /// Books written by this author, in the order they were added
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        library(ctx)?
            .books_by_author(self.id)
            .map_err(|e| e.extend())
    }
}

/// A book written by one author
#[Object(name = "Book")]
impl Book {
    async fn id(&self) -> i32 {
        self.id.get()
    }

    async fn name(&self) -> &str {
        &self.name
    }

    async fn author_id(&self) -> i32 {
        self.author_id.get()
    }

    /// The author of this book, or null if no author has its `authorId`
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        library(ctx)?.author_of_book(self).map_err(|e| e.extend())
    }
}
