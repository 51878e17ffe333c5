//! Test traversing the author -> books and book -> author relations.

use serde_json::json;

use crate::e2e_tests::helpers::TestClient;

#[test]
fn test_author_book_names() {
    let test = TestClient::new();

    let data = test.data("query { author(id: 2) { books { name } } }");

    assert_eq!(
        data,
        json!({ "author": { "books": [{ "name": "book1" }, { "name": "book3" }] } })
    );
}

#[test]
fn test_book_author() {
    let test = TestClient::new();

    let data = test.data("{ book(id: 4) { name author { id name } } }");

    assert_eq!(
        data,
        json!({ "book": { "name": "book4", "author": { "id": 3, "name": "joe" } } })
    );
}

#[test]
fn test_every_author_with_books() {
    let test = TestClient::new();

    let data = test.data("{ authors { name books { id } } }");

    assert_eq!(
        data["authors"],
        json!([
            { "name": "bob", "books": [{ "id": 2 }] },
            { "name": "sam", "books": [{ "id": 1 }, { "id": 3 }] },
            { "name": "joe", "books": [{ "id": 4 }] },
        ])
    );
}

#[test]
fn test_round_trip_through_relations() {
    let test = TestClient::new();

    let data = test.data("{ book(id: 1) { author { books { author { name } } } } }");

    assert_eq!(
        data["book"]["author"]["books"],
        json!([{ "author": { "name": "sam" } }, { "author": { "name": "sam" } }])
    );
}
