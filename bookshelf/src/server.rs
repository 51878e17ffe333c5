//! HTTP surface: routes the GraphQL endpoint, the GraphiQL page and a
//! health probe onto an axum router.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Json, Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::{MethodRouter, get, post},
};
use tower_http::trace::TraceLayer;

use crate::graphql::BookshelfSchema;

/// Path of the GraphQL endpoint.
pub const GRAPHQL_PATH: &str = "/graphql";

/// Build the application router.
///
/// `POST /graphql` executes requests against `schema`. When `graphiql` is
/// set, `GET /graphql` serves the exploration page for the same endpoint.
#[must_use]
pub fn router(schema: BookshelfSchema, graphiql: bool) -> Router {
    let mut graphql_route: MethodRouter<BookshelfSchema> = post(graphql_handler);
    if graphiql {
        graphql_route = graphql_route.get(graphiql_page);
    }

    Router::new()
        .route(GRAPHQL_PATH, graphql_route)
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}

async fn graphql_handler(
    State(schema): State<BookshelfSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

async fn graphiql_page() -> impl IntoResponse {
    Html(
        GraphiQLSource::build()
            .endpoint(GRAPHQL_PATH)
            .title("Bookshelf GraphiQL")
            .finish(),
    )
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "up": true }))
}
