//! Event processing: the unit of work for one event id.
//!
//! Processing runs three steps in a fixed order:
//!
//! 1. feed projection -- render and persist the activity feed entry,
//! 2. baseline notifications -- hard-coded per-event-type recipients,
//! 3. automation evaluation -- tenant rules, each isolated from the others.
//!
//! The order is load-bearing: automations may assume the feed and baseline
//! side effects already happened when their actions fire.

use caretrack_core::event_types;
use caretrack_core::path;
use caretrack_core::severity::{SEVERITY_INFO, SEVERITY_WARNING};
use caretrack_core::types::DbId;
use caretrack_db::models::event::OrgEvent;
use caretrack_db::models::notification::NewNotification;
use caretrack_db::repositories::{
    ActivityFeedRepo, AutomationRepo, EventRepo, NotificationRepo, StaffRepo,
};
use serde::Serialize;
use sqlx::PgPool;

use crate::engine::{self, AutomationOutcome};
use crate::error::PipelineError;
use crate::feed;

/// Aggregate report for one processed event.
#[derive(Debug, Serialize)]
pub struct ProcessReport {
    pub event_id: DbId,
    pub feed_created: bool,
    pub automations: Vec<AutomationOutcome>,
}

/// Process a single event by id.
///
/// Fails with [`PipelineError::EventNotFound`] for an unknown id and with
/// [`PipelineError::Database`] when the feed or baseline writes fail.
/// Automation failures never fail the call -- they appear as per-automation
/// outcomes in the report.
pub async fn process(pool: &PgPool, event_id: DbId) -> Result<ProcessReport, PipelineError> {
    let event = EventRepo::get(pool, event_id)
        .await?
        .ok_or(PipelineError::EventNotFound(event_id))?;

    // Step A: feed projection. The insert is first-writer-wins on the
    // event id, so reprocessing (or a concurrent processor) cannot
    // duplicate the feed line.
    let mut feed_created = false;
    if let Some(rendered) = feed::render(&event.event_type, &event.payload) {
        feed_created = ActivityFeedRepo::create(
            pool,
            event.org_id,
            event.id,
            rendered.feed_type,
            &rendered.message,
            rendered.link.as_deref(),
            &event.payload,
        )
        .await?
        .is_some();
    }

    // Step B: baseline notifications.
    baseline_notifications(pool, &event).await?;

    // Step C: automations, each isolated behind its own idempotency gate.
    let automations =
        AutomationRepo::list_enabled_for_trigger(pool, event.org_id, &event.event_type).await?;
    let event_json = event.as_json();

    let mut outcomes = Vec::with_capacity(automations.len());
    for automation in &automations {
        outcomes.push(engine::run_automation(pool, &event, &event_json, automation).await);
    }

    tracing::info!(
        event_id = %event.id,
        event_type = %event.event_type,
        feed_created,
        automation_count = outcomes.len(),
        "Event processed"
    );

    Ok(ProcessReport {
        event_id: event.id,
        feed_created,
        automations: outcomes,
    })
}

/// Event-type-specific hard-coded recipients (not tenant-configurable).
async fn baseline_notifications(pool: &PgPool, event: &OrgEvent) -> Result<(), sqlx::Error> {
    let competency =
        path::lookup_str(&event.payload, "competency_title").unwrap_or("a competency");
    let staff_name = path::lookup_str(&event.payload, "staff_name").unwrap_or("A staff member");
    let link = path::lookup_str(&event.payload, "link").map(str::to_owned);
    let recipient = path::lookup_id(&event.payload, "staff_user_id");

    match event.event_type.as_str() {
        event_types::ASSIGNMENT_CREATED => {
            if let Some(user_id) = recipient {
                NotificationRepo::create(
                    pool,
                    &NewNotification {
                        org_id: event.org_id,
                        user_id,
                        event_id: Some(event.id),
                        title: "New assignment".to_string(),
                        body: format!("You have been assigned {competency}."),
                        severity: SEVERITY_INFO.to_string(),
                        link: link.clone(),
                        metadata: serde_json::json!({ "source": "baseline" }),
                    },
                )
                .await?;
            }
        }

        event_types::ASSIGNMENT_OVERDUE => {
            if let Some(user_id) = recipient {
                NotificationRepo::create(
                    pool,
                    &NewNotification {
                        org_id: event.org_id,
                        user_id,
                        event_id: Some(event.id),
                        title: "Assignment overdue".to_string(),
                        body: format!("{competency} is past its due date."),
                        severity: SEVERITY_WARNING.to_string(),
                        link: link.clone(),
                        metadata: serde_json::json!({ "source": "baseline" }),
                    },
                )
                .await?;
            }

            // Escalate to every manager, whether or not the staff member
            // has a linked account.
            for manager in StaffRepo::list_managers(pool, event.org_id).await? {
                let Some(user_id) = manager.user_id else {
                    continue;
                };
                NotificationRepo::create(
                    pool,
                    &NewNotification {
                        org_id: event.org_id,
                        user_id,
                        event_id: Some(event.id),
                        title: "Overdue assignment".to_string(),
                        body: format!("{staff_name} is overdue for {competency}."),
                        severity: SEVERITY_WARNING.to_string(),
                        link: link.clone(),
                        metadata: serde_json::json!({ "source": "baseline" }),
                    },
                )
                .await?;
            }
        }

        // All other event types have no baseline recipients.
        _ => {}
    }

    Ok(())
}
