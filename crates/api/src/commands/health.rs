//! Liveness check backed by a database round trip

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use tracing::warn;

use crate::context::AppContext;
use crate::errors::AppError;

/// `GET /health`
///
/// # Example Response
/// ```json
/// { "status": "ok" }
/// ```
pub async fn health(State(ctx): State<Arc<AppContext>>) -> Result<Json<Value>, AppError> {
    match ctx.health_check().await {
        Ok(()) => Ok(Json(json!({ "status": "ok" }))),
        Err(err) => {
            warn!(error = %err, "health check failed");
            Err(AppError::service_unavailable("database unreachable"))
        }
    }
}
