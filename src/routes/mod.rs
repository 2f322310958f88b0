//! Router assembly.

mod common;
mod docs;
mod resources;

pub use common::common_routes;
pub use docs::{docs_routes, ApiDoc};
pub use resources::resource_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application: resource routes, operational routes and the OpenAPI document,
/// with request tracing and a body size cap.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(resource_routes(state.clone()))
        .merge(common_routes(state))
        .merge(docs_routes())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
