//! Policy document endpoints

use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;
use servdesk_domain::SlaPolicy;

use crate::context::AppContext;
use crate::errors::AppError;
use crate::utils::logging::{error_label, log_request_outcome};

/// `GET /api/sla/configuration`
///
/// Returns the stored document as written, which may be partial, or `{}`
/// when nothing has been saved.
pub async fn get_configuration(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<Value>, AppError> {
    let start = Instant::now();
    let result = ctx.sla.get_configuration().await;
    log_request_outcome("sla::get_configuration", start.elapsed(), result.is_ok());

    Ok(Json(result?))
}

/// `POST /api/sla/configuration`
///
/// Replaces the whole document. Malformed bodies are 400, documents that
/// parse but break policy rules are 422.
pub async fn save_configuration(
    State(ctx): State<Arc<AppContext>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SlaPolicy>, AppError> {
    let Json(document) = payload?;

    let start = Instant::now();
    let result = ctx.sla.save_document(document).await;
    log_request_outcome("sla::save_configuration", start.elapsed(), result.is_ok());

    match result {
        Ok(policy) => Ok(Json(policy)),
        Err(err) => {
            tracing::debug!(error_type = error_label(&err), "configuration rejected");
            Err(err.into())
        }
    }
}
