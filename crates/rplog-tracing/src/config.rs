//! Subscriber setup
//!
//! - Env filter: `RUST_LOG`, default `info`
//! - Console: compact, colored (disable with `RPLOG_CONSOLE=0`)
//! - Reporting layer: [`RpHandler`] with threshold `RPLOG_LEVEL` (name or
//!   number, default NOTSET)

use rplog_core::{ParseSeverityError, ReportingClient, RpHandler, Severity};
use std::sync::Arc;
use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

use crate::layer::RpLayer;

/// Environment variable holding the filter directives
pub const FILTER_ENV: &str = "RUST_LOG";
/// Environment variable holding the reporting handler threshold
pub const LEVEL_ENV: &str = "RPLOG_LEVEL";
/// Environment variable toggling console output
pub const CONSOLE_ENV: &str = "RPLOG_CONSOLE";

const DEFAULT_FILTER: &str = "info";

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum InitError {
    #[error("invalid filter directives: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("invalid RPLOG_LEVEL: {0}")]
    Level(#[from] ParseSeverityError),

    #[error("failed to install global subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directives applied to every layer
    pub filter: String,
    /// Also print to the console
    pub console: bool,
    /// Minimum severity forwarded to the reporting client
    pub rp_level: Severity,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            console: true,
            rp_level: Severity::NOTSET,
        }
    }
}

impl LoggingConfig {
    /// Load from the process environment, reading `.env` first if present
    pub fn from_env() -> Result<Self, InitError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InitError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(filter) = lookup(FILTER_ENV).filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }
        if let Some(level) = lookup(LEVEL_ENV) {
            config.rp_level = Severity::parse(&level)?;
        }
        if let Some(console) = lookup(CONSOLE_ENV) {
            config.console = !matches!(
                console.trim().to_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
        }

        Ok(config)
    }
}

/// Build the subscriber without installing it
pub fn build_subscriber(
    client: Arc<dyn ReportingClient>,
    config: &LoggingConfig,
) -> Result<impl Subscriber + Send + Sync + 'static, InitError> {
    let env_filter = EnvFilter::try_new(&config.filter)?;

    let console_layer = config.console.then(|| {
        fmt::layer()
            .with_ansi(true)
            .compact()
            .with_target(true)
            .with_line_number(false)
            .with_file(false)
    });

    let rp_layer = RpLayer::new(RpHandler::new(client).with_level(config.rp_level));

    Ok(tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(rp_layer))
}

/// Install the global subscriber. Fails if one is already set.
pub fn init_logging(
    client: Arc<dyn ReportingClient>,
    config: &LoggingConfig,
) -> Result<(), InitError> {
    build_subscriber(client, config)?.try_init()?;
    Ok(())
}
