//! Test listing all authors and all books.

use serde_json::json;

use crate::e2e_tests::helpers::TestClient;

#[test]
fn test_list_book_ids() {
    let test = TestClient::new();

    let data = test.data("query { books { id } }");

    assert_eq!(
        data,
        json!({ "books": [{ "id": 1 }, { "id": 2 }, { "id": 3 }, { "id": 4 }] })
    );
}

#[test]
fn test_list_authors() {
    let test = TestClient::new();

    let data = test.data("{ authors { id name } }");

    assert_eq!(
        data,
        json!({
            "authors": [
                { "id": 1, "name": "bob" },
                { "id": 2, "name": "sam" },
                { "id": 3, "name": "joe" },
            ]
        })
    );
}

#[test]
fn test_list_books_with_author_ids() {
    let test = TestClient::new();

    let data = test.data("{ books { name authorId } }");

    assert_eq!(
        data["books"],
        json!([
            { "name": "book1", "authorId": 2 },
            { "name": "book2", "authorId": 1 },
            { "name": "book3", "authorId": 2 },
            { "name": "book4", "authorId": 3 },
        ])
    );
}

#[test]
fn test_list_is_stable_without_mutation() {
    let test = TestClient::new();

    let first = test.data("{ authors { id name } }");
    let second = test.data("{ authors { id name } }");

    assert_eq!(first, second);
}
