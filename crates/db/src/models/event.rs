//! Event log entity model.

use caretrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `org_events` table.
///
/// Events are immutable facts: inserted once, never updated or deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrgEvent {
    pub id: DbId,
    pub org_id: DbId,
    pub actor_user_id: Option<DbId>,
    pub event_type: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<DbId>,
    pub payload: serde_json::Value,
    pub created_at: Timestamp,
}

impl OrgEvent {
    /// The event as a JSON value for dotted-path resolution.
    ///
    /// Condition paths like `payload.risk` or top-level `event_type` are
    /// resolved against this representation.
    pub fn as_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
