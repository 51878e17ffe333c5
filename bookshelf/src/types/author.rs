//! Author record.

use serde::{Deserialize, Serialize};

use crate::types::ids::AuthorId;

/// An author as held by the entity store.
///
/// The books written by an author are not stored here; they are derived
/// from the book collection on demand.
///
/// The serde form matches the `Author` object in GraphQL responses, so JSON
/// returned by `/graphql` decodes straight back into this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Store-assigned identifier.
    pub id: AuthorId,
    /// Display name. Never empty when created through the operation surface.
    pub name: String,
}

impl Author {
    /// Create a new author record.
    #[must_use]
    pub const fn new(id: AuthorId, name: String) -> Self {
        Self { id, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_decodes_from_response_json() {
        let json = serde_json::json!({ "id": 4, "name": "alex" });
        let author: Author = serde_json::from_value(json).unwrap();
        assert_eq!(author, Author::new(AuthorId(4), "alex".to_string()));
    }
}
