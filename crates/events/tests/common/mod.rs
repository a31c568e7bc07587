//! Shared fixtures for pipeline integration tests.
//!
//! Staff and automations are written by other services in production, so
//! the repositories expose no inserts for them; tests seed rows directly.

#![allow(dead_code)]

use caretrack_core::types::DbId;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

pub fn org() -> DbId {
    Uuid::new_v4()
}

pub async fn seed_staff(
    pool: &PgPool,
    org_id: DbId,
    full_name: &str,
    user_id: Option<DbId>,
    is_manager: bool,
) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO staff_members (org_id, user_id, full_name, is_manager) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(org_id)
    .bind(user_id)
    .bind(full_name)
    .bind(is_manager)
    .fetch_one(pool)
    .await
    .expect("failed to seed staff member")
}

pub async fn seed_assignment(
    pool: &PgPool,
    org_id: DbId,
    staff_id: DbId,
    competency_title: &str,
    due_date: Option<NaiveDate>,
    status: &str,
) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO assignments (org_id, staff_id, competency_title, due_date, status) \
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(org_id)
    .bind(staff_id)
    .bind(competency_title)
    .bind(due_date)
    .bind(status)
    .fetch_one(pool)
    .await
    .expect("failed to seed assignment")
}

pub async fn seed_automation(
    pool: &PgPool,
    org_id: DbId,
    name: &str,
    trigger_event: &str,
    conditions: serde_json::Value,
    actions: serde_json::Value,
) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO automations (org_id, name, trigger_event, conditions, actions) \
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(org_id)
    .bind(name)
    .bind(trigger_event)
    .bind(conditions)
    .bind(actions)
    .fetch_one(pool)
    .await
    .expect("failed to seed automation")
}

/// Days in the past or future relative to today (UTC, date granularity).
pub fn days_from_today(days: i64) -> NaiveDate {
    chrono::Utc::now().date_naive() + chrono::Duration::days(days)
}
