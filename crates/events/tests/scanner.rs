//! Integration tests for the overdue-assignment scanner: per-item failure
//! isolation and the optional dedup window.

mod common;

use caretrack_db::repositories::{EventRepo, NotificationRepo};
use caretrack_events::OverdueScanner;
use sqlx::PgPool;
use uuid::Uuid;

#[sqlx::test(migrations = "../../db/migrations")]
async fn scan_emits_one_event_per_overdue_assignment(pool: PgPool) {
    let org = common::org();
    let staff_user = Uuid::new_v4();
    let staff = common::seed_staff(&pool, org, "J. Rivera", Some(staff_user), false).await;

    common::seed_assignment(
        &pool, org, staff, "Fall Prevention",
        Some(common::days_from_today(-3)), "pending",
    )
    .await;
    // Due today is not overdue; completed and undated ones never are.
    common::seed_assignment(
        &pool, org, staff, "CPR", Some(common::days_from_today(0)), "pending",
    )
    .await;
    common::seed_assignment(
        &pool, org, staff, "Hand Hygiene", Some(common::days_from_today(-10)), "completed",
    )
    .await;
    common::seed_assignment(&pool, org, staff, "Charting", None, "pending").await;

    let report = OverdueScanner::new(None).scan(&pool).await.unwrap();
    assert_eq!(report.overdue_found, 1);
    assert_eq!(report.emitted, 1);
    assert_eq!(report.processed, 1);

    // The emitted event flowed through the full pipeline: the staff member
    // got their overdue warning.
    let notes = NotificationRepo::list_for_user(&pool, staff_user, 10, 0)
        .await
        .unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].severity, "warning");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn one_failing_item_does_not_halt_the_sweep(pool: PgPool) {
    // The nil org id fails emit validation for the first assignment; the
    // second one must still go through.
    let bad_org = Uuid::nil();
    let good_org = common::org();
    let bad_staff = common::seed_staff(&pool, bad_org, "Ghost", None, false).await;
    let good_staff = common::seed_staff(&pool, good_org, "M. Chen", Some(Uuid::new_v4()), false).await;

    common::seed_assignment(
        &pool, bad_org, bad_staff, "Orphaned", Some(common::days_from_today(-1)), "pending",
    )
    .await;
    common::seed_assignment(
        &pool, good_org, good_staff, "CPR", Some(common::days_from_today(-1)), "pending",
    )
    .await;

    let report = OverdueScanner::new(None).scan(&pool).await.unwrap();
    assert_eq!(report.overdue_found, 2);
    assert_eq!(report.emitted, 1);
    assert_eq!(report.processed, 1);

    let events: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM org_events WHERE org_id = $1")
        .bind(good_org)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(events, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn without_dedup_every_sweep_re_emits(pool: PgPool) {
    let org = common::org();
    let staff = common::seed_staff(&pool, org, "J. Rivera", None, false).await;
    common::seed_assignment(
        &pool, org, staff, "Fall Prevention", Some(common::days_from_today(-2)), "pending",
    )
    .await;

    let scanner = OverdueScanner::new(None);
    scanner.scan(&pool).await.unwrap();
    let second = scanner.scan(&pool).await.unwrap();
    assert_eq!(second.emitted, 1, "daily nag: still-overdue items re-emit");

    let events = EventRepo::list_recent_for_org(&pool, org, 10, 0).await.unwrap();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.event_type == "assignment_overdue"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn dedup_window_suppresses_repeat_emission(pool: PgPool) {
    let org = common::org();
    let staff = common::seed_staff(&pool, org, "J. Rivera", None, false).await;
    common::seed_assignment(
        &pool, org, staff, "Fall Prevention", Some(common::days_from_today(-2)), "pending",
    )
    .await;

    let scanner = OverdueScanner::new(Some(7));
    let first = scanner.scan(&pool).await.unwrap();
    assert_eq!(first.emitted, 1);
    assert_eq!(first.deduped, 0);

    let second = scanner.scan(&pool).await.unwrap();
    assert_eq!(second.overdue_found, 1);
    assert_eq!(second.emitted, 0);
    assert_eq!(second.deduped, 1);
}
