//! Query and mutation roots.
//!
//! Each top-level field forwards to one [`Library`](crate::Library)
//! operation.

use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::graphql::library;
use crate::types::{Author, AuthorId, Book, BookId};

#[derive(Debug, Default)]
pub struct QueryRoot;

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
    /// single author
    async fn author(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Author>> {
        library(ctx)?
            .author(id.map(AuthorId))
            .map_err(|e| e.extend())
    }

    /// single book
    async fn book(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Book>> {
        library(ctx)?.book(id.map(BookId)).map_err(|e| e.extend())
    }

    /// List of all books
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        library(ctx)?.books().map_err(|e| e.extend())
    }

    /// List of all authors
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        library(ctx)?.authors().map_err(|e| e.extend())
    }
}

#[derive(Debug, Default)]
pub struct MutationRoot;

/// Root mutation
#[Object(name = "Mutation")]
impl MutationRoot {
    /// add a book
    async fn add_book(&self, ctx: &Context<'_>, name: String, author_id: i32) -> Result<Book> {
        library(ctx)?
            .add_book(&name, AuthorId(author_id))
            .map_err(|e| e.extend())
    }

    /// add an author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> Result<Author> {
        library(ctx)?.add_author(&name).map_err(|e| e.extend())
    }
}
