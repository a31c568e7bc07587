//! Event emission: validate, append to the log, optionally process.

use caretrack_core::types::DbId;
use caretrack_db::models::event::OrgEvent;
use caretrack_db::repositories::EventRepo;
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::PipelineError;
use crate::processor::{self, ProcessReport};

/// Request to record a new event.
#[derive(Debug, Clone, Deserialize)]
pub struct EmitRequest {
    pub org_id: DbId,
    pub actor_user_id: Option<DbId>,
    pub event_type: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<DbId>,
    #[serde(default = "empty_payload")]
    pub payload: serde_json::Value,
    #[serde(default = "default_true")]
    pub process_now: bool,
}

fn empty_payload() -> serde_json::Value {
    serde_json::Value::Object(Default::default())
}

fn default_true() -> bool {
    true
}

/// Result of an emit call.
///
/// `processed` is `false` either because processing was deferred
/// (`process_now = false`) or because it failed; in the latter case
/// `process_error` carries the detail. The stored event is durable in
/// every case and can be reprocessed later.
#[derive(Debug)]
pub struct EmitOutcome {
    pub event: OrgEvent,
    pub processed: bool,
    pub process_error: Option<String>,
    pub report: Option<ProcessReport>,
}

/// Validate and record a new event, then optionally process it.
///
/// A processing failure does not roll back the event write; the stored
/// event can be reprocessed later.
pub async fn emit(pool: &PgPool, request: EmitRequest) -> Result<EmitOutcome, PipelineError> {
    if request.org_id.is_nil() {
        return Err(PipelineError::Validation("org_id is required".into()));
    }
    if request.event_type.trim().is_empty() {
        return Err(PipelineError::Validation("event_type is required".into()));
    }

    let event = EventRepo::insert(
        pool,
        request.org_id,
        request.actor_user_id,
        &request.event_type,
        request.entity_type.as_deref(),
        request.entity_id,
        &request.payload,
    )
    .await?;

    tracing::info!(
        event_id = %event.id,
        org_id = %event.org_id,
        event_type = %event.event_type,
        process_now = request.process_now,
        "Event recorded"
    );

    if !request.process_now {
        return Ok(EmitOutcome {
            event,
            processed: false,
            process_error: None,
            report: None,
        });
    }

    match processor::process(pool, event.id).await {
        Ok(report) => Ok(EmitOutcome {
            event,
            processed: true,
            process_error: None,
            report: Some(report),
        }),
        Err(e) => {
            // The event stays durable; report the failure and move on.
            tracing::warn!(event_id = %event.id, error = %e, "Synchronous processing failed");
            Ok(EmitOutcome {
                event,
                processed: false,
                process_error: Some(e.to_string()),
                report: None,
            })
        }
    }
}
