//! Handlers for the `/events` pipeline endpoints.
//!
//! All endpoints are service-to-service and gated by [`EdgeAuth`].
//! Request bodies are parsed from raw JSON so a missing required field
//! yields a 400 with a descriptive message rather than a generic
//! deserialization rejection.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use caretrack_core::types::DbId;
use caretrack_events::{emit, process, EmitRequest, OverdueScanner};
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::middleware::edge_secret::EdgeAuth;
use crate::state::AppState;

/// POST /api/v1/events/emit
///
/// Record a new event and, unless `process_now` is `false`, process it in
/// the same call. Returns 200 when processing succeeded and 202 when the
/// event was stored but processing was deferred or failed -- the event is
/// durable either way.
pub async fn emit_event(
    _auth: EdgeAuth,
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let request: EmitRequest = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid emit request: {e}")))?;

    let outcome = emit(&state.pool, request).await?;

    let status = if outcome.processed {
        StatusCode::OK
    } else {
        StatusCode::ACCEPTED
    };

    Ok((
        status,
        Json(json!({
            "ok": true,
            "event": outcome.event,
            "processed": outcome.processed,
            "process_error": outcome.process_error,
            "process_response": outcome.report,
        })),
    ))
}

/// POST /api/v1/events/process
///
/// Process a previously stored event by id. Used by the scheduler and for
/// reprocessing events whose synchronous processing failed at emit time.
pub async fn process_event(
    _auth: EdgeAuth,
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<Json<serde_json::Value>> {
    let event_id: DbId = body
        .get("event_id")
        .and_then(|v| v.as_str())
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| AppError::BadRequest("event_id is required".into()))?;

    let report = process(&state.pool, event_id).await?;

    Ok(Json(json!({
        "ok": true,
        "event_id": report.event_id,
        "feed_created": report.feed_created,
        "automations": report.automations,
    })))
}

/// POST /api/v1/events/scan-overdue
///
/// Sweep for overdue assignments and emit one `assignment_overdue` event
/// per item. Triggered by an external scheduler (or the in-process loop).
pub async fn scan_overdue(
    _auth: EdgeAuth,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let scanner = OverdueScanner::new(state.config.overdue_dedup_window_days);
    let report = scanner.scan(&state.pool).await.map_err(AppError::Database)?;

    Ok(Json(json!({
        "ok": true,
        "overdue_found": report.overdue_found,
        "emitted": report.emitted,
        "processed": report.processed,
        "deduped": report.deduped,
    })))
}
