//! Repository for the `org_events` table.

use caretrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::OrgEvent;

/// Column list for `org_events` queries.
const COLUMNS: &str =
    "id, org_id, actor_user_id, event_type, entity_type, entity_id, payload, created_at";

/// Provides append and read operations for the event log.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event row, returning the full persisted row.
    pub async fn insert(
        pool: &PgPool,
        org_id: DbId,
        actor_user_id: Option<DbId>,
        event_type: &str,
        entity_type: Option<&str>,
        entity_id: Option<DbId>,
        payload: &serde_json::Value,
    ) -> Result<OrgEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO org_events \
                (org_id, actor_user_id, event_type, entity_type, entity_id, payload) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OrgEvent>(&query)
            .bind(org_id)
            .bind(actor_user_id)
            .bind(event_type)
            .bind(entity_type)
            .bind(entity_id)
            .bind(payload)
            .fetch_one(pool)
            .await
    }

    /// Fetch a single event by id.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Option<OrgEvent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM org_events WHERE id = $1");
        sqlx::query_as::<_, OrgEvent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List recent events for an organization, newest first.
    pub async fn list_recent_for_org(
        pool: &PgPool,
        org_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<OrgEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM org_events \
             WHERE org_id = $1 \
             ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, OrgEvent>(&query)
            .bind(org_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Check whether an event of the given type was already recorded for an
    /// entity within the last `window_days` days.
    ///
    /// Used by the overdue scanner's optional dedup window.
    pub async fn has_recent_for_entity(
        pool: &PgPool,
        event_type: &str,
        entity_type: &str,
        entity_id: DbId,
        window_days: i64,
    ) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM org_events \
             WHERE event_type = $1 AND entity_type = $2 AND entity_id = $3 \
               AND created_at > NOW() - make_interval(days => $4::int)",
        )
        .bind(event_type)
        .bind(entity_type)
        .bind(entity_id)
        .bind(window_days)
        .fetch_one(pool)
        .await?;
        Ok(count > 0)
    }
}
