//! Repository for the `automation_runs` table.
//!
//! The unique constraint `uq_automation_runs_automation_event` makes the
//! insert a compare-and-set: the first processor to claim an
//! (automation, event) pair wins, every later attempt is a no-op.

use caretrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::automation::{AutomationRun, RUN_STATUS_FAILED, RUN_STATUS_SUCCESS};

/// Column list for `automation_runs` queries.
const COLUMNS: &str = "id, automation_id, event_id, status, error, created_at";

/// Provides claim and update operations for automation run records.
pub struct AutomationRunRepo;

impl AutomationRunRepo {
    /// Claim the (automation, event) pair by inserting a `success` run row.
    ///
    /// Returns the new run id, or `None` when a row already exists -- the
    /// caller must then skip the automation entirely.
    pub async fn try_claim(
        pool: &PgPool,
        automation_id: DbId,
        event_id: DbId,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO automation_runs (automation_id, event_id, status) \
             VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT uq_automation_runs_automation_event DO NOTHING \
             RETURNING id",
        )
        .bind(automation_id)
        .bind(event_id)
        .bind(RUN_STATUS_SUCCESS)
        .fetch_optional(pool)
        .await
    }

    /// Flip an already-claimed run to `failed`, recording the error message.
    pub async fn mark_failed(
        pool: &PgPool,
        run_id: DbId,
        error: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE automation_runs SET status = $1, error = $2 WHERE id = $3")
            .bind(RUN_STATUS_FAILED)
            .bind(error)
            .bind(run_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Fetch the run record for an (automation, event) pair.
    pub async fn get_for_pair(
        pool: &PgPool,
        automation_id: DbId,
        event_id: DbId,
    ) -> Result<Option<AutomationRun>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM automation_runs \
             WHERE automation_id = $1 AND event_id = $2"
        );
        sqlx::query_as::<_, AutomationRun>(&query)
            .bind(automation_id)
            .bind(event_id)
            .fetch_optional(pool)
            .await
    }

    /// Count run rows for an event (test and diagnostics support).
    pub async fn count_for_event(pool: &PgPool, event_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM automation_runs WHERE event_id = $1")
            .bind(event_id)
            .fetch_one(pool)
            .await
    }
}
