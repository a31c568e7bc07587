//! Notification entity models.

use caretrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub org_id: DbId,
    pub user_id: DbId,
    pub event_id: Option<DbId>,
    pub title: String,
    pub body: String,
    pub severity: String,
    pub link: Option<String>,
    pub metadata: serde_json::Value,
    pub is_read: bool,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Insert payload for a notification.
///
/// Built by the processor (baseline rules) and by automation actions.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub org_id: DbId,
    pub user_id: DbId,
    pub event_id: Option<DbId>,
    pub title: String,
    pub body: String,
    pub severity: String,
    pub link: Option<String>,
    pub metadata: serde_json::Value,
}
