use axum::routing::post;
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Routes for the event pipeline endpoints. POST-only; other methods get
/// a 405 from the method router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events/emit", post(events::emit_event))
        .route("/events/process", post(events::process_event))
        .route("/events/scan-overdue", post(events::scan_overdue))
}
