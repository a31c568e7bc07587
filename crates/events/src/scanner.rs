//! Overdue-assignment sweep.
//!
//! Finds assignments whose due date has passed without completion and
//! emits one `assignment_overdue` event per item through the regular
//! emitter, so feed, baseline notifications, and automations all apply.
//! Per-item failures are isolated: one bad assignment never halts the
//! rest of the sweep.

use caretrack_core::event_types;
use caretrack_db::models::assignment::Assignment;
use caretrack_db::repositories::{AssignmentRepo, EventRepo, StaffRepo};
use serde::Serialize;
use sqlx::PgPool;

use crate::emitter::{self, EmitRequest};

/// Entity type recorded on scanner-emitted events.
const ENTITY_ASSIGNMENT: &str = "assignment";

/// Aggregate counters for one sweep.
#[derive(Debug, Default, Serialize)]
pub struct ScanReport {
    /// Assignments matched by the overdue query.
    pub overdue_found: u64,
    /// Events successfully recorded.
    pub emitted: u64,
    /// Emitted events whose synchronous processing also succeeded.
    pub processed: u64,
    /// Assignments skipped by the dedup window.
    pub deduped: u64,
}

/// Periodic overdue sweep.
///
/// Without a dedup window every sweep re-emits an event for each still
/// overdue assignment (a deliberate daily nag). Setting
/// `dedup_window_days` suppresses re-emission for assignments that
/// already received an overdue event within the window.
pub struct OverdueScanner {
    dedup_window_days: Option<i64>,
}

impl OverdueScanner {
    pub fn new(dedup_window_days: Option<i64>) -> Self {
        Self { dedup_window_days }
    }

    /// Run one sweep.
    ///
    /// Only a failure of the initial overdue query fails the call;
    /// everything after that is counted, logged, and isolated per item.
    pub async fn scan(&self, pool: &PgPool) -> Result<ScanReport, sqlx::Error> {
        let today = chrono::Utc::now().date_naive();
        let overdue = AssignmentRepo::list_overdue(pool, today).await?;

        let mut report = ScanReport {
            overdue_found: overdue.len() as u64,
            ..Default::default()
        };

        for assignment in &overdue {
            if self.is_deduped(pool, assignment).await {
                report.deduped += 1;
                continue;
            }

            match emitter::emit(pool, self.build_request(pool, assignment).await).await {
                Ok(outcome) => {
                    report.emitted += 1;
                    if outcome.processed {
                        report.processed += 1;
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        assignment_id = %assignment.id,
                        error = %e,
                        "Failed to emit overdue event for assignment"
                    );
                }
            }
        }

        tracing::info!(
            overdue_found = report.overdue_found,
            emitted = report.emitted,
            processed = report.processed,
            deduped = report.deduped,
            "Overdue scan complete"
        );

        Ok(report)
    }

    /// Check the dedup window; errors count as not deduped so a probe
    /// failure can only cause a repeat nag, never a missed one.
    async fn is_deduped(&self, pool: &PgPool, assignment: &Assignment) -> bool {
        let Some(window_days) = self.dedup_window_days else {
            return false;
        };
        match EventRepo::has_recent_for_entity(
            pool,
            event_types::ASSIGNMENT_OVERDUE,
            ENTITY_ASSIGNMENT,
            assignment.id,
            window_days,
        )
        .await
        {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(
                    assignment_id = %assignment.id,
                    error = %e,
                    "Dedup probe failed, emitting anyway"
                );
                false
            }
        }
    }

    /// Build the emit request for one overdue assignment.
    ///
    /// Staff resolution is best-effort: a missing staff row yields null
    /// name/login fields, not an error.
    async fn build_request(&self, pool: &PgPool, assignment: &Assignment) -> EmitRequest {
        let staff = match StaffRepo::get(pool, assignment.staff_id).await {
            Ok(staff) => staff,
            Err(e) => {
                tracing::warn!(
                    staff_id = %assignment.staff_id,
                    error = %e,
                    "Failed to resolve staff member for overdue assignment"
                );
                None
            }
        };

        let payload = serde_json::json!({
            "assignment_id": assignment.id,
            "staff_id": assignment.staff_id,
            "staff_user_id": staff.as_ref().and_then(|s| s.user_id),
            "staff_name": staff.as_ref().map(|s| s.full_name.clone()),
            "facility_id": assignment.facility_id,
            "competency_id": assignment.competency_id,
            "competency_title": assignment.competency_title,
            "due_date": assignment.due_date,
            "link": format!("/assignments/{}", assignment.id),
        });

        EmitRequest {
            org_id: assignment.org_id,
            actor_user_id: None,
            event_type: event_types::ASSIGNMENT_OVERDUE.to_string(),
            entity_type: Some(ENTITY_ASSIGNMENT.to_string()),
            entity_id: Some(assignment.id),
            payload,
            process_now: true,
        }
    }
}
