//! # RpLog Core Library
//!
//! Domain types and the reporting handler for RpLog.
//!
//! ## Modules
//!
//! - `severity` - Numeric severities on the standard logging scale
//! - `level` - Reporting-service level names and the severity → name mapping
//! - `record` - Log records, extension options and extra fields
//! - `client` - The reporting client interface consumed by the handler
//! - `format` - Record formatters
//! - `handler` - `Handler` capability and the reporting handler `RpHandler`
//! - `error` - Error types
//!
//! ## Flow
//!
//! ```text
//!  LogRecord ──► RpHandler::handle
//!                  │  severity < threshold? ──► dropped
//!                  ▼
//!                RecordFormatter::format ──► message
//!                RpLevel::from_severity  ──► FATAL | ERROR | WARN | INFO | DEBUG | TRACE
//!                  │
//!                  ├─ is_launch_log ──► ReportingClient::post_launch_log(message, level, file)
//!                  └─ otherwise     ──► ReportingClient::post_log(message, level, file)
//! ```

pub mod client;
pub mod error;
pub mod format;
pub mod handler;
pub mod level;
pub mod record;
pub mod severity;

pub use client::{ClientResult, ReportingClient};
pub use error::{ClientOperation, EmitError, ParseSeverityError};
pub use format::{DefaultFormatter, JsonFormatter, RecordFormatter};
pub use handler::{Handler, RpHandler};
pub use level::{RpLevel, LEVEL_MAP};
pub use record::{keys, Extra, LogOptions, LogRecord};
pub use severity::Severity;
