/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Shared secret expected in the `x-edge-secret` header.
    ///
    /// When unset the check is disabled -- suitable only for local
    /// development and tests.
    pub edge_secret: Option<String>,
    /// Period of the in-process overdue scan loop in seconds.
    /// `0` disables the loop (an external scheduler hits the scan
    /// endpoint instead).
    pub overdue_scan_interval_secs: u64,
    /// Optional dedup window for the overdue scanner, in days.
    ///
    /// Unset preserves the re-emit-on-every-sweep behavior.
    pub overdue_dedup_window_days: Option<i64>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default     |
    /// |-----------------------------|-------------|
    /// | `HOST`                      | `0.0.0.0`   |
    /// | `PORT`                      | `3000`      |
    /// | `REQUEST_TIMEOUT_SECS`      | `30`        |
    /// | `SHUTDOWN_TIMEOUT_SECS`     | `30`        |
    /// | `EDGE_SECRET`               | (unset)     |
    /// | `OVERDUE_SCAN_INTERVAL_SECS`| `0` (off)   |
    /// | `OVERDUE_DEDUP_WINDOW_DAYS` | (unset)     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let edge_secret = std::env::var("EDGE_SECRET").ok().filter(|s| !s.is_empty());

        let overdue_scan_interval_secs: u64 = std::env::var("OVERDUE_SCAN_INTERVAL_SECS")
            .unwrap_or_else(|_| "0".into())
            .parse()
            .expect("OVERDUE_SCAN_INTERVAL_SECS must be a valid u64");

        let overdue_dedup_window_days: Option<i64> = std::env::var("OVERDUE_DEDUP_WINDOW_DAYS")
            .ok()
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse()
                    .expect("OVERDUE_DEDUP_WINDOW_DAYS must be a valid i64")
            });

        Self {
            host,
            port,
            request_timeout_secs,
            shutdown_timeout_secs,
            edge_secret,
            overdue_scan_interval_secs,
            overdue_dedup_window_days,
        }
    }
}
