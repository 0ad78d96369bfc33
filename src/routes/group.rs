//! Group CRUD routes, mounted under `/api/groups`.

use crate::handlers::group::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn group_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}

/// `<prefix>/` for the collection, so a trailing slash lists and creates like the bare path.
pub fn group_collection_slash_route(prefix: &str, state: AppState) -> Router {
    Router::new()
        .route(&format!("{}/", prefix), get(list).post(create))
        .with_state(state)
}
