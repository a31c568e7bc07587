//! Staff member entity model.

use caretrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `staff_members` table.
///
/// `user_id` links the staff record to a login identity; it is `NULL` for
/// staff who have never activated an account.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StaffMember {
    pub id: DbId,
    pub org_id: DbId,
    pub user_id: Option<DbId>,
    pub full_name: String,
    pub is_manager: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
}
