#![cfg_attr(test, allow(clippy::disallowed_methods))]
// Forbid unwrap() in production code.
// Test code is allowed to use unwrap() for convenience.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]

use bookshelf::{Library, config::ServerConfig, graphql, server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment variables
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Loaded configuration: listen_address={}, listen_port={}, seed_data={}, graphiql={}",
        config.listen_address,
        config.listen_port,
        config.seed_data,
        config.graphiql
    );

    // All data lives in memory and is gone when the process exits.
    let library = if config.seed_data {
        Library::seeded()
    } else {
        Library::default()
    };

    let schema = graphql::build_schema(library);
    let app = server::router(schema, config.graphiql);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind: {e}");
            std::process::exit(1);
        });

    tracing::info!("server running on http://{}{}", addr, server::GRAPHQL_PATH);

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    });
}
