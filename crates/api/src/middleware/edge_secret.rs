//! Shared-secret authentication extractor for the pipeline endpoints.
//!
//! The pipeline is called service-to-service (scheduler, sibling
//! functions), so instead of user sessions it is gated by a shared secret
//! carried in the `x-edge-secret` header. When no secret is configured the
//! check is disabled entirely.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use caretrack_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the shared secret.
const EDGE_SECRET_HEADER: &str = "x-edge-secret";

/// Proof that the caller presented the configured shared secret.
///
/// Use this as an extractor parameter in any handler that requires the
/// service-to-service gate:
///
/// ```ignore
/// async fn my_handler(_auth: EdgeAuth, State(state): State<AppState>) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EdgeAuth;

impl FromRequestParts<AppState> for EdgeAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.config.edge_secret.as_deref() else {
            return Ok(EdgeAuth);
        };

        let presented = parts
            .headers
            .get(EDGE_SECRET_HEADER)
            .and_then(|v| v.to_str().ok());

        match presented {
            Some(secret) if secret == expected => Ok(EdgeAuth),
            _ => Err(AppError::Core(CoreError::Unauthorized(
                "Missing or invalid x-edge-secret header".into(),
            ))),
        }
    }
}
