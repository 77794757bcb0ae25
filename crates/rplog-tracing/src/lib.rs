//! # RpLog Tracing Integration
//!
//! Plugs the reporting handler into the `tracing` ecosystem.
//!
//! - [`RpLogger`] - logger whose calls accept [`LogOptions`] (attachment,
//!   launch-log flag) on top of the usual level / message / error / extras
//! - [`RpLayer`] - `tracing_subscriber::Layer` that rebuilds a
//!   [`LogRecord`](rplog_core::LogRecord) from each event and hands it to a
//!   [`Handler`](rplog_core::Handler)
//! - [`init_logging`] - global subscriber: env filter, console, reporting layer
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rplog_tracing::{init_logging, LoggingConfig, LogOptions, RpLogger};
//!
//! init_logging(Arc::new(client), &LoggingConfig::from_env()?)?;
//!
//! let logger = RpLogger::new("behave");
//! logger.info("build finished", LogOptions::attach("/tmp/out.log"));
//! logger.critical("fatal crash", LogOptions::launch());
//!
//! // Plain tracing macros use the same field names
//! tracing::warn!(file_to_attach = "/tmp/screen.png", "flaky step");
//! ```

mod config;
mod layer;
mod logger;
mod visitor;

pub use config::{build_subscriber, init_logging, InitError, LoggingConfig};
pub use layer::RpLayer;
pub use logger::{CallArgs, RpLogger};

pub use rplog_core::{LogOptions, Severity};
