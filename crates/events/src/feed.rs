//! Pure event-to-feed-entry rendering.
//!
//! Maps `(event_type, payload)` to a human-readable activity feed line.
//! Only the event types listed in [`caretrack_core::event_types`] have a
//! rendering; anything else produces no feed entry, which is not an error.
//!
//! Every template substitutes a readable fallback when a payload field is
//! absent -- rendered text never contains `null`.

use caretrack_core::event_types;
use caretrack_core::path;
use serde_json::Value;

/// Fallback for a missing staff name.
const FALLBACK_STAFF: &str = "A staff member";

/// Fallback for a missing competency title.
const FALLBACK_COMPETENCY: &str = "a competency";

/// Fallback for a missing policy title.
const FALLBACK_POLICY: &str = "A policy";

/// A rendered feed entry, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFeedEntry {
    /// Feed category (e.g. `"assignment"`, `"policy"`).
    pub feed_type: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Optional deep link taken from the payload.
    pub link: Option<String>,
}

/// Render the feed entry for an event, or `None` for unknown event types.
pub fn render(event_type: &str, payload: &Value) -> Option<RenderedFeedEntry> {
    let staff = path::lookup_str(payload, "staff_name").unwrap_or(FALLBACK_STAFF);
    let competency =
        path::lookup_str(payload, "competency_title").unwrap_or(FALLBACK_COMPETENCY);

    let (feed_type, message) = match event_type {
        event_types::ASSIGNMENT_CREATED => {
            ("assignment", format!("{staff} was assigned {competency}."))
        }
        event_types::ASSIGNMENT_COMPLETED => {
            ("assignment", format!("{staff} completed {competency}."))
        }
        event_types::ASSIGNMENT_OVERDUE => {
            ("assignment", format!("{staff} is overdue for {competency}."))
        }
        event_types::POLICY_PUBLISHED => {
            let policy = path::lookup_str(payload, "policy_title").unwrap_or(FALLBACK_POLICY);
            ("policy", format!("{policy} was published."))
        }
        event_types::DEFICIENCY_CREATED => {
            ("deficiency", format!("{staff} received a deficiency."))
        }
        _ => return None,
    };

    Some(RenderedFeedEntry {
        feed_type,
        message,
        link: path::lookup_str(payload, "link").map(str::to_owned),
    })
}
