//! HTTP API server

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::menu::MenuStore;

pub mod handlers;
pub mod logging;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .nest(
            "/api",
            Router::new()
                .route(
                    "/menu",
                    get(handlers::list_items).post(handlers::create_item),
                )
                .route(
                    "/menu/:id",
                    get(handlers::get_item)
                        .put(handlers::update_item)
                        .delete(handlers::delete_item),
                ),
        )
        .layer(middleware::from_fn(logging::log_request))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience helper: router over a freshly seeded store
pub fn create_router_with_store(store: Arc<MenuStore>) -> Router {
    create_router(AppState::new(store))
}
