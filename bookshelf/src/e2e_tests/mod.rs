//! End-to-end tests at the GraphQL request/response level.
//!
//! Each test file covers a specific scenario, using the sample library or an
//! empty one to verify the complete request/response cycle.

#![cfg(test)]

mod helpers;

mod test_add_author;
mod test_add_book;
mod test_dangling_author;
mod test_http;
mod test_missing_arguments;
mod test_query_empty_library;
mod test_query_lists;
mod test_query_nested;
mod test_query_nonexistent;
mod test_query_single;
