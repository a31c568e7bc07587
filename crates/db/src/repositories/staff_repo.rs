//! Repository for the `staff_members` table (read-only in this service).

use caretrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::staff::StaffMember;

/// Column list for `staff_members` queries.
const COLUMNS: &str = "id, org_id, user_id, full_name, is_manager, is_active, created_at";

/// Provides read operations for the staff directory.
pub struct StaffRepo;

impl StaffRepo {
    /// Fetch a single staff member by id.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Option<StaffMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff_members WHERE id = $1");
        sqlx::query_as::<_, StaffMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every active manager of an organization with a linked login
    /// identity.
    ///
    /// These are the fan-out targets for `notify_managers` and for the
    /// baseline overdue escalation.
    pub async fn list_managers(pool: &PgPool, org_id: DbId) -> Result<Vec<StaffMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM staff_members \
             WHERE org_id = $1 AND is_manager = true AND is_active = true \
               AND user_id IS NOT NULL \
             ORDER BY full_name"
        );
        sqlx::query_as::<_, StaffMember>(&query)
            .bind(org_id)
            .fetch_all(pool)
            .await
    }
}
