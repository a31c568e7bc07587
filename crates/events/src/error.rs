use caretrack_core::types::DbId;

/// Error type for the emit/process pipeline.
///
/// Per-automation failures never surface here -- they are captured as
/// [`AutomationOutcome`](crate::engine::AutomationOutcome) entries so one
/// broken rule cannot fail its siblings or the overall request.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A required request field is missing or empty.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The referenced event id does not exist.
    #[error("Event not found: {0}")]
    EventNotFound(DbId),

    /// An underlying persistence call failed.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
