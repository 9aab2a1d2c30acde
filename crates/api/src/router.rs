//! Route table

use std::sync::Arc;

use axum::routing::{delete, get};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::commands;
use crate::context::AppContext;

/// Build the application router with tracing attached.
pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/health", get(commands::health))
        .route(
            "/api/sla/configuration",
            get(commands::get_configuration).post(commands::save_configuration),
        )
        .route("/api/sla/holidays", get(commands::list_holidays).post(commands::create_holiday))
        .route("/api/sla/holidays/{id}", delete(commands::delete_holiday))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
