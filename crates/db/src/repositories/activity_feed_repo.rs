//! Repository for the `activity_feed` table.
//!
//! The unique constraint `uq_activity_feed_event` enforces at most one
//! feed entry per event at the database level, so concurrent processing
//! of the same event cannot double-insert.

use caretrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::feed::ActivityFeedEntry;

/// Column list for `activity_feed` queries.
const COLUMNS: &str = "id, org_id, event_id, feed_type, message, link, metadata, created_at";

/// Provides insert and read operations for activity feed entries.
pub struct ActivityFeedRepo;

impl ActivityFeedRepo {
    /// Create the feed entry for an event.
    ///
    /// Returns the new entry id, or `None` when the event already has a
    /// feed entry (first writer wins).
    pub async fn create(
        pool: &PgPool,
        org_id: DbId,
        event_id: DbId,
        feed_type: &str,
        message: &str,
        link: Option<&str>,
        metadata: &serde_json::Value,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO activity_feed (org_id, event_id, feed_type, message, link, metadata) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT ON CONSTRAINT uq_activity_feed_event DO NOTHING \
             RETURNING id",
        )
        .bind(org_id)
        .bind(event_id)
        .bind(feed_type)
        .bind(message)
        .bind(link)
        .bind(metadata)
        .fetch_optional(pool)
        .await
    }

    /// List feed entries for an organization, newest first.
    pub async fn list_for_org(
        pool: &PgPool,
        org_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ActivityFeedEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activity_feed \
             WHERE org_id = $1 \
             ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ActivityFeedEntry>(&query)
            .bind(org_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Fetch the feed entry derived from an event, if any.
    pub async fn get_for_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Option<ActivityFeedEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activity_feed WHERE event_id = $1");
        sqlx::query_as::<_, ActivityFeedEntry>(&query)
            .bind(event_id)
            .fetch_optional(pool)
            .await
    }
}
