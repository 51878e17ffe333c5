//! Common helpers for end-to-end tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use crate::graphql::{BookshelfSchema, build_schema};
use crate::operations::Library;
use crate::server;
use crate::store::EntityStore;

/// A schema plus the runtime needed to drive it from synchronous tests.
pub struct TestClient {
    pub library: Library,
    pub schema: BookshelfSchema,
    pub runtime: tokio::runtime::Runtime,
}

impl TestClient {
    /// Create a client over the sample library (3 authors, 4 books).
    #[must_use]
    pub fn new() -> Self {
        Self::with_library(Library::seeded())
    }

    /// Create a client over empty collections.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_library(Library::new(EntityStore::new()))
    }

    #[must_use]
    fn with_library(library: Library) -> Self {
        let schema = build_schema(library.clone());

        #[allow(clippy::expect_used)]
        let runtime = tokio::runtime::Runtime::new().expect("Failed to create runtime");

        Self {
            library,
            schema,
            runtime,
        }
    }

    /// Execute a GraphQL document and return the full response as JSON
    /// (`data` and, if any, `errors`).
    pub fn execute(&self, document: &str) -> Value {
        let response = self.runtime.block_on(self.schema.execute(document));

        #[allow(clippy::expect_used)]
        serde_json::to_value(&response).expect("GraphQL response should serialize")
    }

    /// Execute a document that must succeed and return its `data`.
    pub fn data(&self, document: &str) -> Value {
        let response = self.execute(document);
        assert!(
            response.get("errors").is_none(),
            "unexpected errors: {response}"
        );
        response["data"].clone()
    }

    /// Send a request through the HTTP router and return status and body.
    pub fn http(&self, graphiql: bool, request: Request<Body>) -> (StatusCode, String) {
        let app: Router = server::router(self.schema.clone(), graphiql);
        self.runtime.block_on(async {
            #[allow(clippy::expect_used)]
            let response = app.oneshot(request).await.expect("router is infallible");
            let status = response.status();
            #[allow(clippy::expect_used)]
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .expect("body should be readable");
            (status, String::from_utf8_lossy(&bytes).into_owned())
        })
    }
}

/// Build a `POST /graphql` request carrying `document`.
#[must_use]
pub fn graphql_post(document: &str) -> Request<Body> {
    let body = serde_json::json!({ "query": document }).to_string();

    #[allow(clippy::expect_used)]
    Request::post(server::GRAPHQL_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request should build")
}

/// Build a `GET` request for `path`.
#[must_use]
pub fn get(path: &str) -> Request<Body> {
    #[allow(clippy::expect_used)]
    Request::get(path)
        .body(Body::empty())
        .expect("request should build")
}

/// The `extensions.code` of the first error in a response.
#[must_use]
pub fn first_error_code(response: &Value) -> Option<&str> {
    response["errors"][0]["extensions"]["code"].as_str()
}

/// The message of the first error in a response.
#[must_use]
pub fn first_error_message(response: &Value) -> Option<&str> {
    response["errors"][0]["message"].as_str()
}
