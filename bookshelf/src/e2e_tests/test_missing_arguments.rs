//! Test that required arguments are enforced by the schema before any
//! operation runs.

use crate::e2e_tests::helpers::TestClient;

fn assert_rejected(test: &TestClient, document: &str) {
    let response = test.execute(document);
    assert!(
        response["errors"].as_array().is_some_and(|e| !e.is_empty()),
        "expected errors for {document}: {response}"
    );
}

#[test]
fn test_add_book_without_name() {
    let test = TestClient::new();

    assert_rejected(&test, "mutation { addBook(authorId: 1) { id } }");
    assert_eq!(test.library.books().unwrap().len(), 4);
}

#[test]
fn test_add_book_without_author_id() {
    let test = TestClient::new();

    assert_rejected(&test, r#"mutation { addBook(name: "book5") { id } }"#);
    assert_eq!(test.library.books().unwrap().len(), 4);
}

#[test]
fn test_add_author_without_name() {
    let test = TestClient::new();

    assert_rejected(&test, "mutation { addAuthor { id } }");
    assert_rejected(&test, "mutation { addAuthor(name: null) { id } }");
    assert_eq!(test.library.authors().unwrap().len(), 3);
}

#[test]
fn test_wrong_argument_type() {
    let test = TestClient::new();

    assert_rejected(&test, r#"{ author(id: "two") { name } }"#);
}

#[test]
fn test_unknown_field() {
    let test = TestClient::new();

    assert_rejected(&test, "{ publishers { id } }");
}
