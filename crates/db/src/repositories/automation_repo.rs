//! Repository for the `automations` table.
//!
//! Automations are authored by tenant admins elsewhere; this service only
//! reads them.

use caretrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::automation::Automation;

/// Column list for `automations` queries.
const COLUMNS: &str =
    "id, org_id, name, enabled, trigger_event, conditions, actions, created_at, updated_at";

/// Provides read operations for automation rules.
pub struct AutomationRepo;

impl AutomationRepo {
    /// List all enabled automations of an organization whose trigger matches
    /// the given event type.
    pub async fn list_enabled_for_trigger(
        pool: &PgPool,
        org_id: DbId,
        trigger_event: &str,
    ) -> Result<Vec<Automation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM automations \
             WHERE org_id = $1 AND trigger_event = $2 AND enabled = true"
        );
        sqlx::query_as::<_, Automation>(&query)
            .bind(org_id)
            .bind(trigger_event)
            .fetch_all(pool)
            .await
    }
}
