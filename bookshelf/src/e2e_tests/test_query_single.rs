//! Test fetching a single author or book by id.

use serde_json::json;

use crate::e2e_tests::helpers::TestClient;

#[test]
fn test_author_by_id() {
    let test = TestClient::new();

    let data = test.data("{ author(id: 3) { id name } }");

    assert_eq!(data, json!({ "author": { "id": 3, "name": "joe" } }));
}

#[test]
fn test_book_by_id() {
    let test = TestClient::new();

    let data = test.data("{ book(id: 2) { id name authorId } }");

    assert_eq!(
        data,
        json!({ "book": { "id": 2, "name": "book2", "authorId": 1 } })
    );
}

#[test]
fn test_omitted_id_returns_null() {
    let test = TestClient::new();

    let data = test.data("{ author { name } book { name } }");

    assert_eq!(data, json!({ "author": null, "book": null }));
}

#[test]
fn test_null_id_returns_null() {
    let test = TestClient::new();

    let data = test.data("{ author(id: null) { name } }");

    assert_eq!(data, json!({ "author": null }));
}

#[test]
fn test_lookup_with_variables() {
    let test = TestClient::new();

    let request = async_graphql::Request::new("query ($id: Int) { book(id: $id) { name } }")
        .variables(async_graphql::Variables::from_json(json!({ "id": 3 })));
    let response = test.runtime.block_on(test.schema.execute(request));

    assert!(response.errors.is_empty());
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "book": { "name": "book3" } })
    );
}
