pub mod events;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /events/emit            record an event, optionally process it (POST)
/// /events/process         process a stored event by id (POST)
/// /events/scan-overdue    sweep overdue assignments (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(events::router())
}
