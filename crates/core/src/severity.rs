//! Notification severity levels.
//!
//! Stored as plain strings in the `notifications.severity` column.

/// Informational notification (default).
pub const SEVERITY_INFO: &str = "info";

/// Something needs attention soon (e.g. an overdue assignment).
pub const SEVERITY_WARNING: &str = "warning";

/// Something needs immediate attention.
pub const SEVERITY_CRITICAL: &str = "critical";

/// All valid severity values, used for validating automation configs.
pub const ALL_SEVERITIES: [&str; 3] = [SEVERITY_INFO, SEVERITY_WARNING, SEVERITY_CRITICAL];
