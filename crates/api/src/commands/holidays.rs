//! Holiday calendar endpoints

use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use servdesk_domain::{Holiday, NewHoliday};

use crate::context::AppContext;
use crate::errors::AppError;
use crate::utils::logging::log_request_outcome;

/// `GET /api/sla/holidays`, ordered by date
pub async fn list_holidays(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<Vec<Holiday>>, AppError> {
    let start = Instant::now();
    let result = ctx.sla.list_holidays().await;
    log_request_outcome("sla::list_holidays", start.elapsed(), result.is_ok());

    Ok(Json(result?))
}

/// `POST /api/sla/holidays` → 201 with the created holiday
pub async fn create_holiday(
    State(ctx): State<Arc<AppContext>>,
    payload: Result<Json<NewHoliday>, JsonRejection>,
) -> Result<(StatusCode, Json<Holiday>), AppError> {
    let Json(request) = payload?;

    let start = Instant::now();
    let result = ctx.sla.create_holiday(request).await;
    log_request_outcome("sla::create_holiday", start.elapsed(), result.is_ok());

    Ok((StatusCode::CREATED, Json(result?)))
}

/// `DELETE /api/sla/holidays/{id}` → 204, or 404 for unknown ids
pub async fn delete_holiday(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let start = Instant::now();
    let result = ctx.sla.delete_holiday(&id).await;
    log_request_outcome("sla::delete_holiday", start.elapsed(), result.is_ok());

    result?;
    Ok(StatusCode::NO_CONTENT)
}
