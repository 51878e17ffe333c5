//! Test the addBook mutation.

use serde_json::json;

use crate::e2e_tests::helpers::{TestClient, first_error_code};
use crate::types::AuthorId;

#[test]
fn test_add_book_to_existing_author() {
    let test = TestClient::new();

    let data = test.data(
        r#"mutation { addBook(name: "book5", authorId: 1) { id name authorId author { name } } }"#,
    );

    assert_eq!(
        data,
        json!({
            "addBook": { "id": 5, "name": "book5", "authorId": 1, "author": { "name": "bob" } }
        })
    );
}

#[test]
fn test_added_book_shows_up_under_author() {
    let test = TestClient::new();

    test.data(r#"mutation { addBook(name: "book5", authorId: 1) { id } }"#);
    let data = test.data("{ author(id: 1) { books { name } } }");

    assert_eq!(
        data,
        json!({ "author": { "books": [{ "name": "book2" }, { "name": "book5" }] } })
    );
}

#[test]
fn test_add_book_scenario_on_empty_library() {
    let test = TestClient::empty();

    test.data(r#"mutation { a: addAuthor(name: "bob") { id } b: addAuthor(name: "sam") { id } }"#);
    let data = test.data(r#"mutation { addBook(name: "book1", authorId: 2) { id name authorId } }"#);

    assert_eq!(
        data,
        json!({ "addBook": { "id": 1, "name": "book1", "authorId": 2 } })
    );
    assert!(test.library.books_by_author(AuthorId(1)).unwrap().is_empty());
    assert_eq!(test.library.books_by_author(AuthorId(2)).unwrap().len(), 1);
}

#[test]
fn test_add_book_empty_name() {
    let test = TestClient::new();

    let response = test.execute(r#"mutation { addBook(name: "", authorId: 1) { id } }"#);

    assert_eq!(first_error_code(&response), Some("VALIDATION_ERROR"));
    assert_eq!(test.library.books().unwrap().len(), 4);
}
