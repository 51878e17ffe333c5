// Life of a request:
// 1. GraphQL document is POSTed to /graphql
// 2. async-graphql parses and validates it against the static schema
// 3. Each top-level field calls one Library operation:
//     - Queries take the store read lock and copy records out
//     - Mutations validate input, then take the write lock and append
// 4. Nested author/book fields go through the relation resolver
// 5. async-graphql serializes the selection back as JSON
//
// System components:
//  - Entity store (two ordered maps + id sequences)
//  - Relation resolver (scans)
//  - Operation surface (Library)
//  - GraphQL schema and HTTP router

pub mod config;
mod e2e_tests;
pub mod graphql;
pub mod operations;
pub mod server;
pub mod store;
pub mod types;

pub use operations::{Library, LibraryError, ValidationError};
