//! Repository for the `assignments` table.

use caretrack_core::types::DbId;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::assignment::{Assignment, NewAssignment, STATUS_COMPLETED};

/// Column list for `assignments` queries.
const COLUMNS: &str = "id, org_id, staff_id, facility_id, competency_id, competency_title, \
                       due_date, status, created_at";

/// Provides insert and read operations for assignments.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Insert a new assignment, returning the full persisted row.
    pub async fn insert(pool: &PgPool, new: &NewAssignment) -> Result<Assignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO assignments \
                (org_id, staff_id, facility_id, competency_id, competency_title, due_date) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(new.org_id)
            .bind(new.staff_id)
            .bind(new.facility_id)
            .bind(new.competency_id)
            .bind(new.competency_title.as_deref())
            .bind(new.due_date)
            .fetch_one(pool)
            .await
    }

    /// Fetch a single assignment by id.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Option<Assignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assignments WHERE id = $1");
        sqlx::query_as::<_, Assignment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List assignments whose due date is strictly before `today` and which
    /// have not been completed.
    ///
    /// Date granularity: an assignment due today is not overdue yet.
    pub async fn list_overdue(
        pool: &PgPool,
        today: NaiveDate,
    ) -> Result<Vec<Assignment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assignments \
             WHERE due_date IS NOT NULL AND due_date < $1 AND status <> $2 \
             ORDER BY due_date"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(today)
            .bind(STATUS_COMPLETED)
            .fetch_all(pool)
            .await
    }
}
