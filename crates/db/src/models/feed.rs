//! Activity feed entity model.

use caretrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `activity_feed` table.
///
/// A tenant-visible, human-readable projection of one event. Created at
/// most once per event; immutable thereafter.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityFeedEntry {
    pub id: DbId,
    pub org_id: DbId,
    pub event_id: DbId,
    pub feed_type: String,
    pub message: String,
    pub link: Option<String>,
    pub metadata: serde_json::Value,
    pub created_at: Timestamp,
}
