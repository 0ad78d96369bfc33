//! Router assembly.

mod common;
mod group;

pub use common::common_routes;
pub use group::{group_collection_slash_route, group_routes};

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub const GROUPS_PATH: &str = "/api/groups";

const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Full application: common routes, the group API and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(group_collection_slash_route(GROUPS_PATH, state.clone()))
        .nest(GROUPS_PATH, group_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES)),
        )
}
