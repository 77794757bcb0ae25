//! Event field visitor
//!
//! Rebuilds a [`LogRecord`] from a `tracing` event. Reserved field names
//! map onto record attributes; every other field is kept as an extra so
//! caller data survives the trip through the subscriber.

use rplog_core::{Extra, LogRecord, Severity};
use serde_json::Value;
use std::error::Error;
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::Metadata;

/// Field names with a fixed meaning on RpLog events
pub(crate) mod fields {
    pub const MESSAGE: &str = "message";
    pub const LOGGER: &str = "logger";
    pub const SEVERITY: &str = "severity";
    pub const EXTRA: &str = "extra";
    pub const EXC_INFO: &str = "exc_info";
    pub const STACK_INFO: &str = "stack_info";
}

#[derive(Debug, Default)]
pub(crate) struct RecordVisitor {
    message: Option<String>,
    logger: Option<String>,
    severity: Option<Severity>,
    exc_info: Option<String>,
    stack_info: Option<String>,
    extra: Extra,
}

impl RecordVisitor {
    /// Finish the record. Severity and name fall back to the event's level and target.
    pub(crate) fn into_record(self, metadata: &Metadata<'_>) -> LogRecord {
        let severity = self
            .severity
            .unwrap_or_else(|| Severity::from(*metadata.level()));
        let name = self
            .logger
            .unwrap_or_else(|| metadata.target().to_string());

        LogRecord::new(name, severity, self.message.unwrap_or_default())
            .with_location(metadata.module_path(), metadata.file(), metadata.line())
            .with_exc_text(self.exc_info)
            .with_stack_info(self.stack_info)
            .with_extra(self.extra)
    }

    fn put(&mut self, name: &str, value: Value) {
        match name {
            fields::MESSAGE => self.message = Some(into_text(value)),
            fields::LOGGER => self.logger = Some(into_text(value)),
            fields::EXC_INFO => self.exc_info = Some(into_text(value)),
            fields::STACK_INFO => self.stack_info = Some(into_text(value)),
            fields::SEVERITY => match severity_from_value(&value) {
                Some(severity) => self.severity = Some(severity),
                None => {
                    self.extra.insert(name.to_string(), value);
                }
            },
            fields::EXTRA => self.merge_extra(value),
            _ => {
                self.extra.insert(name.to_string(), value);
            }
        }
    }

    /// The logger ships its extra mapping as one JSON object
    fn merge_extra(&mut self, value: Value) {
        let parsed = match &value {
            Value::String(s) => serde_json::from_str::<Extra>(s).ok(),
            _ => None,
        };
        match parsed {
            Some(extra) => self.extra.extend(extra),
            None => {
                self.extra.insert(fields::EXTRA.to_string(), value);
            }
        }
    }
}

impl Visit for RecordVisitor {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.put(field.name(), Value::from(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field.name(), Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field.name(), Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field.name(), Value::Bool(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field.name(), Value::String(value.to_string()));
    }

    fn record_error(&mut self, field: &Field, value: &(dyn Error + 'static)) {
        self.put(field.name(), Value::String(render_error_chain(value)));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.put(field.name(), Value::String(format!("{:?}", value)));
    }
}

/// Error and its sources, one per line
pub(crate) fn render_error_chain(error: &(dyn Error + 'static)) -> String {
    let mut out = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        out.push_str("\nCaused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

fn into_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn severity_from_value(value: &Value) -> Option<Severity> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(|v| Severity(v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)),
        Value::String(s) => Severity::parse(s).ok(),
        _ => None,
    }
}
