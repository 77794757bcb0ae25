//! Extended logger
//!
//! [`RpLogger`] keeps the usual call surface (severity, message, error,
//! stack, extra fields) and adds [`LogOptions`]. Supplied options are merged
//! into the extra fields under the fixed keys, then the call goes out as an
//! ordinary `tracing` event with target `rplog`.

use rplog_core::{Extra, LogOptions, Severity};
use serde_json::Value;
use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt;
use tracing::level_filters::LevelFilter;
use tracing::Level;

use crate::visitor::render_error_chain;

/// Standard per-call parameters besides severity and message
#[derive(Debug, Clone, Default)]
pub struct CallArgs {
    /// Rendered exception info
    pub exc_info: Option<String>,
    /// Capture the current call stack into the record
    pub stack_info: bool,
    /// Caller extra fields
    pub extra: Extra,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an error (and its sources) as exception info
    pub fn with_error(mut self, error: &(dyn Error + 'static)) -> Self {
        self.exc_info = Some(render_error_chain(error));
        self
    }

    pub fn with_stack_info(mut self, stack_info: bool) -> Self {
        self.stack_info = stack_info;
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Named logger with reporting options on every call.
///
/// # Example
///
/// ```ignore
/// let logger = RpLogger::new("behave");
/// logger.info("build finished", LogOptions::attach("/tmp/out.log"));
/// logger.critical("fatal crash", LogOptions::launch());
/// ```
#[derive(Debug, Clone)]
pub struct RpLogger {
    name: String,
    level: Severity,
}

impl RpLogger {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: Severity::NOTSET,
        }
    }

    /// Set the minimum severity this logger emits
    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    /// Whether a call at `severity` would reach the subscriber
    pub fn is_enabled_for(&self, severity: Severity) -> bool {
        severity >= self.level && severity.to_tracing_level() <= LevelFilter::current()
    }

    pub fn log(&self, severity: Severity, message: impl fmt::Display, options: LogOptions) {
        self.log_with(severity, message, CallArgs::default(), options);
    }

    pub fn log_with(
        &self,
        severity: Severity,
        message: impl fmt::Display,
        args: CallArgs,
        options: LogOptions,
    ) {
        if !self.is_enabled_for(severity) {
            return;
        }

        let CallArgs {
            exc_info,
            stack_info,
            mut extra,
        } = args;
        options.merge_into(&mut extra);

        let stack = stack_info.then(|| {
            format!(
                "Stack (most recent call last):\n{}",
                Backtrace::force_capture()
            )
        });
        let extra = if extra.is_empty() {
            None
        } else {
            serde_json::to_string(&extra).ok()
        };

        dispatch(
            &EventFields {
                logger: &self.name,
                severity,
                extra: extra.as_deref(),
                exc_info: exc_info.as_deref(),
                stack_info: stack.as_deref(),
            },
            &message,
        );
    }

    pub fn trace(&self, message: impl fmt::Display, options: LogOptions) {
        self.log(Severity::TRACE, message, options);
    }

    pub fn debug(&self, message: impl fmt::Display, options: LogOptions) {
        self.log(Severity::DEBUG, message, options);
    }

    pub fn info(&self, message: impl fmt::Display, options: LogOptions) {
        self.log(Severity::INFO, message, options);
    }

    pub fn warning(&self, message: impl fmt::Display, options: LogOptions) {
        self.log(Severity::WARNING, message, options);
    }

    pub fn error(&self, message: impl fmt::Display, options: LogOptions) {
        self.log(Severity::ERROR, message, options);
    }

    pub fn critical(&self, message: impl fmt::Display, options: LogOptions) {
        self.log(Severity::CRITICAL, message, options);
    }

    /// ERROR with `error` rendered as exception info
    pub fn exception(
        &self,
        message: impl fmt::Display,
        error: &(dyn Error + 'static),
        options: LogOptions,
    ) {
        self.log_with(
            Severity::ERROR,
            message,
            CallArgs::new().with_error(error),
            options,
        );
    }
}

/// Field values of one outgoing event
struct EventFields<'a> {
    logger: &'a str,
    severity: Severity,
    extra: Option<&'a str>,
    exc_info: Option<&'a str>,
    stack_info: Option<&'a str>,
}

macro_rules! emit_at {
    ($level:expr, $event:expr, $message:expr) => {
        tracing::event!(
            target: "rplog",
            $level,
            logger = $event.logger,
            severity = i64::from($event.severity.value()),
            extra = $event.extra,
            exc_info = $event.exc_info,
            stack_info = $event.stack_info,
            "{}",
            $message
        )
    };
}

// `tracing` levels are static per callsite, hence one arm per level.
fn dispatch(event: &EventFields<'_>, message: &dyn fmt::Display) {
    match event.severity.to_tracing_level() {
        Level::ERROR => emit_at!(Level::ERROR, event, message),
        Level::WARN => emit_at!(Level::WARN, event, message),
        Level::INFO => emit_at!(Level::INFO, event, message),
        Level::DEBUG => emit_at!(Level::DEBUG, event, message),
        _ => emit_at!(Level::TRACE, event, message),
    }
}
