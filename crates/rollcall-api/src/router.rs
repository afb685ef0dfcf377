//! Route table and shared handler state.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use rollcall_core::EventStore;

use crate::handlers;

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EventStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }
}

/// Build the application router over the given store.
pub fn app(store: Arc<dyn EventStore>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route(
            "/events",
            get(handlers::list_events).post(handlers::create_event),
        )
        .route(
            "/events/:id",
            get(handlers::get_event)
                .patch(handlers::update_event)
                .delete(handlers::delete_event),
        )
        .route("/person", post(handlers::create_person))
        .route("/seeds", post(handlers::seed))
        .layer(middleware::from_fn(crate::middleware::json_content_type))
        .with_state(AppState::new(store))
}
