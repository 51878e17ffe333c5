//! Test the HTTP surface: the GraphQL endpoint, GraphiQL page and health probe.

use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::e2e_tests::helpers::{TestClient, get, graphql_post};
use crate::types::{Author, AuthorId};

#[test]
fn test_post_query() {
    let test = TestClient::new();

    let (status, body) = test.http(true, graphql_post("{ authors { id name } }"));

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    let authors: Vec<Author> = serde_json::from_value(body["data"]["authors"].clone()).unwrap();
    assert_eq!(authors.len(), 3);
    assert_eq!(authors[1], Author::new(AuthorId(2), "sam".to_string()));
}

#[test]
fn test_post_mutation_is_visible_to_later_requests() {
    let test = TestClient::new();

    let (status, _) = test.http(
        true,
        graphql_post(r#"mutation { addAuthor(name: "alex") { id } }"#),
    );
    assert_eq!(status, StatusCode::OK);

    let (_, body) = test.http(true, graphql_post("{ author(id: 4) { name } }"));
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["data"], json!({ "author": { "name": "alex" } }));
}

#[test]
fn test_graphiql_page() {
    let test = TestClient::new();

    let (status, body) = test.http(true, get("/graphql"));

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Bookshelf GraphiQL"));
    assert!(body.contains("/graphql"));
}

#[test]
fn test_graphiql_disabled() {
    let test = TestClient::new();

    let (status, _) = test.http(false, get("/graphql"));

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[test]
fn test_health() {
    let test = TestClient::new();

    let (status, body) = test.http(true, get("/health"));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({ "up": true }));
}
