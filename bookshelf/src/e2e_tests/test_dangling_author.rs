//! Test that a book may reference an author that does not exist.

use serde_json::json;

use crate::e2e_tests::helpers::TestClient;

#[test]
fn test_add_book_with_unknown_author() {
    let test = TestClient::new();

    let response =
        test.execute(r#"mutation { addBook(name: "orphan", authorId: 999) { id authorId author { name } } }"#);

    assert!(response.get("errors").is_none());
    assert_eq!(
        response["data"],
        json!({ "addBook": { "id": 5, "authorId": 999, "author": null } })
    );
}

#[test]
fn test_dangling_book_is_listed_but_not_under_any_author() {
    let test = TestClient::new();

    test.data(r#"mutation { addBook(name: "orphan", authorId: 999) { id } }"#);

    let data = test.data("{ books { name } authors { books { name } } }");
    assert_eq!(data["books"].as_array().map(Vec::len), Some(5));
    let under_authors: Vec<_> = data["authors"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|a| a["books"].as_array().unwrap().clone())
        .collect();
    assert_eq!(under_authors.len(), 4);
    assert!(!under_authors.contains(&json!({ "name": "orphan" })));
}
