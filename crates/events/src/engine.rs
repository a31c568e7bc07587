//! Tenant-configurable automation rule engine.
//!
//! An automation is an if-this-then-that rule bound to one event type:
//! a list of [`Condition`]s (logical AND) guarding a list of [`Action`]s.
//! Conditions and actions are stored as raw JSON and parsed per run, so a
//! misconfigured rule is reported in its own outcome instead of breaking
//! its siblings.
//!
//! Idempotency: before anything is evaluated, the run claims the
//! (automation, event) pair via [`AutomationRunRepo::try_claim`]. A
//! conflicting insert means the pair was already processed and the
//! automation is skipped -- retried processing never double-fires actions.

use caretrack_core::path;
use caretrack_core::severity::{ALL_SEVERITIES, SEVERITY_INFO};
use caretrack_core::types::DbId;
use caretrack_db::models::assignment::NewAssignment;
use caretrack_db::models::automation::Automation;
use caretrack_db::models::event::OrgEvent;
use caretrack_db::models::notification::NewNotification;
use caretrack_db::repositories::{
    AssignmentRepo, AutomationRunRepo, NotificationRepo, StaffRepo,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::PgPool;

/// Default due-date offset for assignments created by automations.
const DEFAULT_DUE_IN_DAYS: i64 = 14;

// ---------------------------------------------------------------------------
// Condition
// ---------------------------------------------------------------------------

/// A single automation condition.
///
/// `path` is a dotted accessor into the serialized event (including its
/// payload, e.g. `payload.risk`). Comparison is strict JSON equality with
/// no coercion.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Condition {
    /// Passes when the field is present and neither `null` nor `""`.
    Exists { path: String },
    /// Passes when the field equals `value` exactly.
    Eq { path: String, value: Value },
    /// Passes when the field differs from `value` (absent fields differ).
    Neq { path: String, value: Value },
    /// Passes when the field is a member of `value`.
    In { path: String, value: Vec<Value> },
}

impl Condition {
    /// Evaluate the condition against the serialized event.
    pub fn evaluate(&self, event_json: &Value) -> bool {
        match self {
            Condition::Exists { path } => match path::lookup(event_json, path) {
                None | Some(Value::Null) => false,
                Some(Value::String(s)) => !s.is_empty(),
                Some(_) => true,
            },
            Condition::Eq { path, value } => path::lookup(event_json, path) == Some(value),
            Condition::Neq { path, value } => path::lookup(event_json, path) != Some(value),
            Condition::In { path, value } => path::lookup(event_json, path)
                .map(|field| value.contains(field))
                .unwrap_or(false),
        }
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// A single automation action.
///
/// Each variant has its own required-field contract; a required field that
/// cannot be resolved from the event skips that action only.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Notify the user resolved from a dotted path into the event
    /// (e.g. `payload.staff_user_id`).
    NotifyUser {
        user_path: String,
        title: String,
        body: String,
        severity: Option<String>,
        link: Option<String>,
    },
    /// Notify every active manager of the organization with a linked
    /// login identity.
    NotifyManagers {
        title: String,
        body: String,
        severity: Option<String>,
        link: Option<String>,
    },
    /// Create a new assignment, resolving staff/facility from literal ids
    /// or dotted paths into the event.
    CreateAssignment {
        staff_id: Option<DbId>,
        staff_path: Option<String>,
        facility_id: Option<DbId>,
        facility_path: Option<String>,
        competency_id: Option<DbId>,
        competency_title: Option<String>,
        due_in_days: Option<i64>,
    },
}

/// Result of executing one action.
enum ActionStatus {
    Executed,
    /// A required field could not be resolved; the action was skipped.
    Skipped(&'static str),
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Per-automation result reported back by the processor.
#[derive(Debug, Clone, Serialize)]
pub struct AutomationOutcome {
    pub automation_id: DbId,
    pub name: String,
    /// `true` when conditions passed and every action either executed or
    /// was skipped for unresolved fields.
    pub ran: bool,
    /// Why the automation did not run (`already_processed`,
    /// `conditions_not_met`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Error message when an action failed or the config was invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub actions_executed: usize,
    pub actions_skipped: usize,
}

impl AutomationOutcome {
    fn new(automation: &Automation) -> Self {
        Self {
            automation_id: automation.id,
            name: automation.name.clone(),
            ran: false,
            reason: None,
            error: None,
            actions_executed: 0,
            actions_skipped: 0,
        }
    }

    fn with_reason(mut self, reason: &str) -> Self {
        self.reason = Some(reason.to_string());
        self
    }

    fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Run one automation against one event.
///
/// Never returns an error: every failure mode is folded into the returned
/// [`AutomationOutcome`] so sibling automations are unaffected.
pub async fn run_automation(
    pool: &PgPool,
    event: &OrgEvent,
    event_json: &Value,
    automation: &Automation,
) -> AutomationOutcome {
    let outcome = AutomationOutcome::new(automation);

    // Idempotency gate, applied before any evaluation.
    let run_id = match AutomationRunRepo::try_claim(pool, automation.id, event.id).await {
        Ok(Some(run_id)) => run_id,
        Ok(None) => {
            tracing::debug!(
                automation_id = %automation.id,
                event_id = %event.id,
                "Automation already processed for this event, skipping"
            );
            return outcome.with_reason("already_processed");
        }
        Err(e) => {
            tracing::error!(
                automation_id = %automation.id,
                event_id = %event.id,
                error = %e,
                "Failed to claim automation run"
            );
            return outcome.with_error(format!("failed to claim run: {e}"));
        }
    };

    // Parse the stored JSON config. Unrecognized op/type values are
    // surfaced as a failed run rather than silently no-opped.
    let (conditions, actions) = match parse_config(automation) {
        Ok(parsed) => parsed,
        Err(msg) => {
            tracing::warn!(
                automation_id = %automation.id,
                name = %automation.name,
                error = %msg,
                "Invalid automation config"
            );
            fail_run(pool, run_id, &msg).await;
            return outcome.with_error(msg);
        }
    };

    // All conditions must hold. A non-matching rule is a successful run:
    // it was considered and found not applicable.
    if !conditions.iter().all(|c| c.evaluate(event_json)) {
        return outcome.with_reason("conditions_not_met");
    }

    let mut outcome = outcome;
    for action in &actions {
        match execute_action(pool, event, event_json, action).await {
            Ok(ActionStatus::Executed) => outcome.actions_executed += 1,
            Ok(ActionStatus::Skipped(why)) => {
                tracing::debug!(
                    automation_id = %automation.id,
                    reason = why,
                    "Action skipped"
                );
                outcome.actions_skipped += 1;
            }
            Err(e) => {
                // One failing action aborts the rest of this automation.
                let msg = format!("action failed: {e}");
                tracing::error!(
                    automation_id = %automation.id,
                    event_id = %event.id,
                    error = %e,
                    "Automation action failed"
                );
                fail_run(pool, run_id, &msg).await;
                return outcome.with_error(msg);
            }
        }
    }

    outcome.ran = true;
    outcome
}

/// Parse the automation's stored conditions and actions arrays.
fn parse_config(automation: &Automation) -> Result<(Vec<Condition>, Vec<Action>), String> {
    let conditions: Vec<Condition> = serde_json::from_value(automation.conditions.clone())
        .map_err(|e| format!("invalid conditions config: {e}"))?;
    let actions: Vec<Action> = serde_json::from_value(automation.actions.clone())
        .map_err(|e| format!("invalid actions config: {e}"))?;
    Ok((conditions, actions))
}

/// Best-effort status flip to `failed`; the claim row itself stays in place.
async fn fail_run(pool: &PgPool, run_id: DbId, error: &str) {
    if let Err(e) = AutomationRunRepo::mark_failed(pool, run_id, error).await {
        tracing::error!(run_id = %run_id, error = %e, "Failed to mark automation run failed");
    }
}

/// Execute one action against the event.
async fn execute_action(
    pool: &PgPool,
    event: &OrgEvent,
    event_json: &Value,
    action: &Action,
) -> Result<ActionStatus, sqlx::Error> {
    match action {
        Action::NotifyUser {
            user_path,
            title,
            body,
            severity,
            link,
        } => {
            let Some(user_id) = path::lookup_id(event_json, user_path) else {
                return Ok(ActionStatus::Skipped("recipient not resolvable"));
            };
            NotificationRepo::create(
                pool,
                &NewNotification {
                    org_id: event.org_id,
                    user_id,
                    event_id: Some(event.id),
                    title: title.clone(),
                    body: body.clone(),
                    severity: normalize_severity(severity.as_deref()),
                    link: link.clone(),
                    metadata: serde_json::json!({ "source": "automation" }),
                },
            )
            .await?;
            Ok(ActionStatus::Executed)
        }

        Action::NotifyManagers {
            title,
            body,
            severity,
            link,
        } => {
            let managers = StaffRepo::list_managers(pool, event.org_id).await?;
            for manager in &managers {
                // list_managers only returns rows with a linked login.
                let Some(user_id) = manager.user_id else {
                    continue;
                };
                NotificationRepo::create(
                    pool,
                    &NewNotification {
                        org_id: event.org_id,
                        user_id,
                        event_id: Some(event.id),
                        title: title.clone(),
                        body: body.clone(),
                        severity: normalize_severity(severity.as_deref()),
                        link: link.clone(),
                        metadata: serde_json::json!({ "source": "automation" }),
                    },
                )
                .await?;
            }
            Ok(ActionStatus::Executed)
        }

        Action::CreateAssignment {
            staff_id,
            staff_path,
            facility_id,
            facility_path,
            competency_id,
            competency_title,
            due_in_days,
        } => {
            let staff = staff_id.or_else(|| {
                staff_path
                    .as_deref()
                    .and_then(|p| path::lookup_id(event_json, p))
            });
            let Some(staff) = staff else {
                return Ok(ActionStatus::Skipped("staff not resolvable"));
            };

            let facility = facility_id.or_else(|| {
                facility_path
                    .as_deref()
                    .and_then(|p| path::lookup_id(event_json, p))
            });

            let due_date = chrono::Utc::now().date_naive()
                + chrono::Days::new(due_in_days.unwrap_or(DEFAULT_DUE_IN_DAYS).max(0) as u64);

            AssignmentRepo::insert(
                pool,
                &NewAssignment {
                    org_id: event.org_id,
                    staff_id: staff,
                    facility_id: facility,
                    competency_id: *competency_id,
                    competency_title: competency_title.clone(),
                    due_date: Some(due_date),
                },
            )
            .await?;
            Ok(ActionStatus::Executed)
        }
    }
}

/// Clamp a configured severity to a known value, defaulting to `info`.
fn normalize_severity(severity: Option<&str>) -> String {
    match severity {
        Some(s) if ALL_SEVERITIES.contains(&s) => s.to_string(),
        Some(other) => {
            tracing::debug!(severity = other, "Unknown severity, defaulting to info");
            SEVERITY_INFO.to_string()
        }
        None => SEVERITY_INFO.to_string(),
    }
}
