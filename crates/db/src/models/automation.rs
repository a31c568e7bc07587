//! Automation rule and run entity models.

use caretrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `automations` table.
///
/// Conditions and actions are stored as raw JSON arrays; the rule engine
/// parses and validates them per run so a misconfigured rule never breaks
/// its siblings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Automation {
    pub id: DbId,
    pub org_id: DbId,
    pub name: String,
    pub enabled: bool,
    pub trigger_event: String,
    pub conditions: serde_json::Value,
    pub actions: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `automation_runs` table.
///
/// The unique constraint on `(automation_id, event_id)` is the idempotency
/// gate: once a row exists, reprocessing the pair is a no-op.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AutomationRun {
    pub id: DbId,
    pub automation_id: DbId,
    pub event_id: DbId,
    pub status: String,
    pub error: Option<String>,
    pub created_at: Timestamp,
}

/// Run status: the automation was considered (actions may or may not have
/// fired, depending on conditions).
pub const RUN_STATUS_SUCCESS: &str = "success";

/// Run status: an action failed after the run row was claimed.
pub const RUN_STATUS_FAILED: &str = "failed";
