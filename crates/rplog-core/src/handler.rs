//! Handlers
//!
//! [`Handler`] is the capability "can receive log records". [`RpHandler`]
//! is the handler that forwards records to a [`ReportingClient`].

use std::error::Error as _;
use std::fmt;
use std::sync::Arc;

use crate::client::ReportingClient;
use crate::error::{ClientOperation, EmitError};
use crate::format::{DefaultFormatter, RecordFormatter};
use crate::level::RpLevel;
use crate::record::LogRecord;
use crate::severity::Severity;

/// Receiver of log records
pub trait Handler: Send + Sync {
    /// Minimum severity this handler accepts
    fn level(&self) -> Severity {
        Severity::NOTSET
    }

    /// Deliver one record
    fn emit(&self, record: &LogRecord) -> Result<(), EmitError>;

    /// Filter by [`Handler::level`], emit, and report any failure.
    ///
    /// Never fails; returns whether the record passed the threshold.
    fn handle(&self, record: &LogRecord) -> bool {
        if record.severity < self.level() {
            return false;
        }
        if let Err(err) = self.emit(record) {
            self.handle_error(record, &err);
        }
        true
    }

    /// Report an emit failure to stderr.
    ///
    /// Not routed through `tracing`: the failing handler may be the one
    /// that would receive it.
    fn handle_error(&self, record: &LogRecord, error: &EmitError) {
        let mut report = format!("--- Logging error ---\n{}", error);
        let mut source = error.source();
        while let Some(cause) = source {
            report.push_str(&format!("\nCaused by: {}", cause));
            source = cause.source();
        }
        eprintln!(
            "{}\nRecord: logger={} severity={} message={:?}",
            report, record.name, record.severity, record.message
        );
    }
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn level(&self) -> Severity {
        (**self).level()
    }

    fn emit(&self, record: &LogRecord) -> Result<(), EmitError> {
        (**self).emit(record)
    }

    fn handle_error(&self, record: &LogRecord, error: &EmitError) {
        (**self).handle_error(record, error)
    }
}

// ============================================================================
// RpHandler
// ============================================================================

/// Forwards records to a reporting client.
///
/// Launch logs go to [`ReportingClient::post_launch_log`], everything else
/// to [`ReportingClient::post_log`]. The client's lifecycle stays with the
/// caller.
///
/// # Example
///
/// ```ignore
/// let handler = RpHandler::new(Arc::new(client)).with_level(Severity::INFO);
/// ```
pub struct RpHandler {
    client: Arc<dyn ReportingClient>,
    level: Severity,
    formatter: Box<dyn RecordFormatter>,
}

impl RpHandler {
    /// Create a handler accepting every severity
    pub fn new(client: Arc<dyn ReportingClient>) -> Self {
        Self {
            client,
            level: Severity::NOTSET,
            formatter: Box::new(DefaultFormatter),
        }
    }

    /// Set the minimum severity
    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    pub fn with_formatter(mut self, formatter: impl RecordFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn client(&self) -> &Arc<dyn ReportingClient> {
        &self.client
    }
}

impl Handler for RpHandler {
    fn level(&self) -> Severity {
        self.level
    }

    fn emit(&self, record: &LogRecord) -> Result<(), EmitError> {
        let message = self.formatter.format(record)?;
        let level = RpLevel::from_severity(record.severity);
        let attachment = record.file_to_attach.as_deref();

        if record.is_launch_log {
            self.client
                .post_launch_log(&message, level, attachment)
                .map_err(|e| EmitError::client(ClientOperation::PostLaunchLog, e))
        } else {
            self.client
                .post_log(&message, level, attachment)
                .map_err(|e| EmitError::client(ClientOperation::PostLog, e))
        }
    }
}

impl fmt::Debug for RpHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpHandler")
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}
