//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor. Holds the report service (which owns the snapshot
//! store) and the server configuration. Clone-friendly via `Arc` internals.

use std::sync::Arc;

use nricheck_report::{InMemorySnapshotStore, ReportService};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// Shared application state accessible to all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// The report service: engine + renderer + snapshot store.
    pub reports: ReportService,
    /// Server configuration.
    pub config: AppConfig,
}

impl AppState {
    /// State with an empty in-memory snapshot store and default config.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// State with an empty in-memory snapshot store and the given config.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            reports: ReportService::new(Arc::new(InMemorySnapshotStore::new())),
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_default_port() {
        let state = AppState::new();
        assert_eq!(state.config.port, 8080);
    }

    #[test]
    fn with_config_applies_port() {
        let state = AppState::with_config(AppConfig { port: 3000 });
        assert_eq!(state.config.port, 3000);
    }

    #[test]
    fn fresh_state_has_no_snapshots() {
        let state = AppState::new();
        assert!(state.reports.latest_for("anyone").is_none());
    }
}
