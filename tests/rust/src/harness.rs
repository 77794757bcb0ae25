//! Test harness
//!
//! Wires a mock reporting client into a full RpLog subscriber and runs
//! closures under it without touching the global default.

use std::sync::Arc;

use rplog_core::{ReportingClient, Severity};
use rplog_tracing::{build_subscriber, LoggingConfig};
use tracing::Dispatch;

/// Subscriber config used by tests: everything enabled, no console noise
pub fn quiet_config() -> LoggingConfig {
    LoggingConfig {
        filter: "trace".to_string(),
        console: false,
        rp_level: Severity::NOTSET,
    }
}

/// A reporting client mounted on a scoped subscriber
pub struct ReporterTestHarness<C> {
    /// The client under observation
    pub client: Arc<C>,
    dispatch: Dispatch,
}

impl<C: ReportingClient + 'static> ReporterTestHarness<C> {
    /// Harness with [`quiet_config`]
    pub fn new(client: C) -> Self {
        Self::with_config(client, quiet_config())
    }

    pub fn with_config(client: C, config: LoggingConfig) -> Self {
        let client = Arc::new(client);
        let subscriber =
            build_subscriber(client.clone(), &config).expect("Failed to build test subscriber");
        Self {
            client,
            dispatch: Dispatch::new(subscriber),
        }
    }

    /// Run `f` with this harness' subscriber as the thread default
    pub fn run<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Shared handle for use from other threads
    pub fn dispatch(&self) -> Dispatch {
        self.dispatch.clone()
    }
}
