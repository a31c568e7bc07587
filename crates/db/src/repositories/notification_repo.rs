//! Repository for the `notifications` table.

use caretrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::notification::{NewNotification, Notification};

/// Column list for `notifications` queries.
const COLUMNS: &str = "id, org_id, user_id, event_id, title, body, severity, link, metadata, \
                       is_read, read_at, created_at";

/// Provides insert and read operations for notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Create a notification, returning the generated ID.
    pub async fn create(pool: &PgPool, new: &NewNotification) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO notifications \
                (org_id, user_id, event_id, title, body, severity, link, metadata) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING id",
        )
        .bind(new.org_id)
        .bind(new.user_id)
        .bind(new.event_id)
        .bind(&new.title)
        .bind(&new.body)
        .bind(&new.severity)
        .bind(new.link.as_deref())
        .bind(&new.metadata)
        .fetch_one(pool)
        .await
    }

    /// List notifications for a user, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications \
             WHERE user_id = $1 \
             ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count notifications that were produced while processing one event.
    pub async fn count_for_event(pool: &PgPool, event_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE event_id = $1")
            .bind(event_id)
            .fetch_one(pool)
            .await
    }

    /// List all notifications produced while processing one event.
    pub async fn list_for_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications WHERE event_id = $1 ORDER BY created_at"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }
}
