//! Test querying a library with no authors or books.

use serde_json::json;

use crate::e2e_tests::helpers::TestClient;

#[test]
fn test_query_empty_library() {
    let test = TestClient::empty();

    let data = test.data("{ authors { id } books { id } author(id: 1) { id } }");

    assert_eq!(data, json!({ "authors": [], "books": [], "author": null }));
}

#[test]
fn test_first_insert_gets_id_one() {
    let test = TestClient::empty();

    let data = test.data(r#"mutation { addAuthor(name: "first") { id } }"#);

    assert_eq!(data, json!({ "addAuthor": { "id": 1 } }));
}
