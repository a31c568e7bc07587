//! Assignment entity model.

use caretrack_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assignment {
    pub id: DbId,
    pub org_id: DbId,
    pub staff_id: DbId,
    pub facility_id: Option<DbId>,
    pub competency_id: Option<DbId>,
    pub competency_title: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: String,
    pub created_at: Timestamp,
}

/// Insert payload for an assignment, used by the `create_assignment`
/// automation action.
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub org_id: DbId,
    pub staff_id: DbId,
    pub facility_id: Option<DbId>,
    pub competency_id: Option<DbId>,
    pub competency_title: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// Assignment status: completed assignments are excluded from overdue scans.
pub const STATUS_COMPLETED: &str = "completed";

/// Assignment status for newly created assignments.
pub const STATUS_PENDING: &str = "pending";
