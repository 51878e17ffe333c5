//! Test the addAuthor mutation.

use serde_json::json;

use crate::e2e_tests::helpers::{TestClient, first_error_code, first_error_message};

#[test]
fn test_add_author_named_alex() {
    let test = TestClient::new();

    let data = test.data(r#"mutation { addAuthor(name: "alex") { id name } }"#);

    assert_eq!(data, json!({ "addAuthor": { "id": 4, "name": "alex" } }));
    assert_eq!(test.library.authors().unwrap().len(), 4);
}

#[test]
fn test_new_author_has_no_books() {
    let test = TestClient::new();

    let data = test.data(r#"mutation { addAuthor(name: "alex") { books { id } } }"#);

    assert_eq!(data, json!({ "addAuthor": { "books": [] } }));
}

#[test]
fn test_ids_keep_increasing() {
    let test = TestClient::new();

    let data = test.data(
        r#"mutation {
            a: addAuthor(name: "alex") { id }
            b: addAuthor(name: "kim") { id }
        }"#,
    );

    assert_eq!(data, json!({ "a": { "id": 4 }, "b": { "id": 5 } }));
    let data = test.data("{ author(id: 5) { name } }");
    assert_eq!(data, json!({ "author": { "name": "kim" } }));
}

#[test]
fn test_add_author_empty_name() {
    let test = TestClient::new();

    let response = test.execute(r#"mutation { addAuthor(name: "  ") { id } }"#);

    assert_eq!(response["data"], json!(null));
    assert_eq!(first_error_code(&response), Some("VALIDATION_ERROR"));
    assert_eq!(
        first_error_message(&response),
        Some("validation error: name must not be empty")
    );
    assert_eq!(test.library.authors().unwrap().len(), 3);
}

#[test]
fn test_add_author_rejects_book_id_argument() {
    let test = TestClient::new();

    let response = test.execute(r#"mutation { addAuthor(name: "alex", bookId: 1) { id } }"#);

    assert!(response["errors"].as_array().is_some_and(|e| !e.is_empty()));
    assert_eq!(test.library.authors().unwrap().len(), 3);
}
