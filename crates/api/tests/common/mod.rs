//! Shared helpers for API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use caretrack_core::types::DbId;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use caretrack_api::config::ServerConfig;
use caretrack_api::router::build_app_router;
use caretrack_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and no edge secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        edge_secret: None,
        overdue_scan_interval_secs: 0,
        overdue_dedup_window_days: None,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This is the same router construction `main.rs` uses, so integration
/// tests exercise the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_with_config(pool, test_config())
}

/// Like [`build_test_app`] but with the shared-secret check enabled.
pub fn build_test_app_with_secret(pool: PgPool, secret: &str) -> Router {
    let config = ServerConfig {
        edge_secret: Some(secret.to_string()),
        ..test_config()
    };
    build_app_with_config(pool, config)
}

fn build_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request");
    app.oneshot(request).await.expect("request failed")
}

/// Send a JSON POST request to the app and return the raw response.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request");
    app.oneshot(request).await.expect("request failed")
}

/// Send a JSON POST with an `x-edge-secret` header.
pub async fn post_json_with_secret(
    app: Router,
    uri: &str,
    secret: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-edge-secret", secret)
        .body(Body::from(body.to_string()))
        .expect("failed to build request");
    app.oneshot(request).await.expect("request failed")
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body was not valid JSON")
}

/// Assert status and return the parsed body in one step.
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Database fixtures
// ---------------------------------------------------------------------------

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

/// Days in the past or future relative to today (UTC, date granularity).
pub fn days_from_today(days: i64) -> NaiveDate {
    chrono::Utc::now().date_naive() + chrono::Duration::days(days)
}
