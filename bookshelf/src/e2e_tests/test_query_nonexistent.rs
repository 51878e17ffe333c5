//! Test that unknown ids resolve to null rather than an error.

use serde_json::json;

use crate::e2e_tests::helpers::TestClient;

#[test]
fn test_query_nonexistent_author() {
    let test = TestClient::new();

    let response = test.execute("{ author(id: 99) { name } }");

    assert!(response.get("errors").is_none());
    assert_eq!(response["data"], json!({ "author": null }));
}

#[test]
fn test_query_nonexistent_book() {
    let test = TestClient::new();

    let data = test.data("{ book(id: 0) { name } negative: book(id: -5) { name } }");

    assert_eq!(data, json!({ "book": null, "negative": null }));
}
