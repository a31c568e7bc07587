//! In-process overdue scan loop.
//!
//! Deployments without an external scheduler can run the overdue sweep as
//! a periodic background task instead of hitting the scan endpoint. The
//! loop exits gracefully when the provided [`CancellationToken`] is
//! cancelled.

use std::time::Duration;

use caretrack_db::DbPool;
use caretrack_events::OverdueScanner;
use tokio_util::sync::CancellationToken;

/// Background service that sweeps overdue assignments on a fixed period.
pub struct OverdueScanLoop {
    pool: DbPool,
    scanner: OverdueScanner,
    period: Duration,
}

impl OverdueScanLoop {
    pub fn new(pool: DbPool, dedup_window_days: Option<i64>, period: Duration) -> Self {
        Self {
            pool,
            scanner: OverdueScanner::new(dedup_window_days),
            period,
        }
    }

    /// Run the scan loop until cancelled.
    pub async fn run(self, cancel: CancellationToken) {
        let mut interval = tokio::time::interval(self.period);
        // The first tick fires immediately; skip it so startup is quiet.
        interval.tick().await;

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Overdue scan loop cancelled");
                    break;
                }
                _ = interval.tick() => {
                    if let Err(e) = self.scanner.scan(&self.pool).await {
                        tracing::error!(error = %e, "Overdue scan failed");
                    }
                }
            }
        }
    }
}
