//! Router assembly.

mod api;
mod common;

pub use api::api_routes;
pub use common::common_routes;

use crate::handlers::fallback::route_not_found;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// The full application: `/api` resources, operational routes, 404 for anything else.
pub fn app(state: AppState) -> Router {
    let body_limit = state.config.body_limit_bytes;
    Router::new()
        .nest("/api", api_routes())
        .merge(common_routes())
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(body_limit)),
        )
        .with_state(state)
}
