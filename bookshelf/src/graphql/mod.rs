//! GraphQL schema over the operation surface.
//!
//! The schema is a static table: `QueryRoot` and `MutationRoot` map each
//! top-level field to a [`Library`] operation, and the `Author`/`Book`
//! object types map nested relation fields to the relation resolver.
//! Parsing, validation and execution are left to `async-graphql`.
//!
//! # Errors
//!
//! Operation failures become field errors carrying an `extensions.code`:
//! `VALIDATION_ERROR` for rejected input, `INTERNAL` for everything else.

mod objects;
mod roots;

use async_graphql::{Context, EmptySubscription, Error, ErrorExtensions, Schema};

pub use roots::{MutationRoot, QueryRoot};

use crate::operations::{Library, LibraryError};

/// The executable schema served at `/graphql`.
pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema around a shared library.
#[must_use]
pub fn build_schema(library: Library) -> BookshelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(library)
        .extension(async_graphql::extensions::Tracing)
        .finish()
}

/// Fetch the library from the schema data.
fn library<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Library> {
    ctx.data::<Library>()
}

impl LibraryError {
    /// Machine-readable error code reported in `extensions.code`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Store(_) | Self::LockPoisoned => "INTERNAL",
        }
    }
}

impl ErrorExtensions for LibraryError {
    fn extend(&self) -> Error {
        let code = self.code();
        Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}
