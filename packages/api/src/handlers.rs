// ABOUTME: HTTP request handlers for the greeting routes
// ABOUTME: Static texts plus a query-validated personal greeting

use axum::extract::Query;
use serde::Deserialize;
use tracing::info;

pub async fn hello_world() -> &'static str {
    "Hello World!"
}

pub async fn path_example() -> &'static str {
    "Hi again!"
}

/// Serve the workspace manifest, the Rust counterpart of a requirements
/// file. Embedded at compile time, so no runtime file lookup.
pub async fn read_requirements() -> &'static str {
    include_str!("../../../Cargo.toml")
}

/// Query parameters for the personal greeting
#[derive(Deserialize)]
pub struct HelloParams {
    pub name: String,
}

/// Greet by name. A missing `name` is rejected by the extractor before
/// this body runs.
pub async fn hello(Query(params): Query<HelloParams>) -> String {
    info!("Greeting {}", params.name);

    format!("Hello {}!", params.name)
}
