//! Record formatters
//!
//! A formatter turns a [`LogRecord`] into the message string posted to the
//! reporting service. Any `Fn(&LogRecord) -> String` is a formatter.

use serde_json::{json, Map, Value};

use crate::error::EmitError;
use crate::record::LogRecord;

/// Renders a record into the posted message
pub trait RecordFormatter: Send + Sync {
    fn format(&self, record: &LogRecord) -> Result<String, EmitError>;
}

/// Message, then exception text and stack text on following lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl RecordFormatter for DefaultFormatter {
    fn format(&self, record: &LogRecord) -> Result<String, EmitError> {
        let mut out = record.message.clone();
        for section in [&record.exc_text, &record.stack_info].into_iter().flatten() {
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(section);
        }
        Ok(out)
    }
}

/// One JSON object per record: logger, level, message, extras.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl RecordFormatter for JsonFormatter {
    fn format(&self, record: &LogRecord) -> Result<String, EmitError> {
        let mut object = Map::new();
        object.insert("ts".to_string(), json!(record.created.to_rfc3339()));
        object.insert("logger".to_string(), json!(record.name));
        object.insert("severity".to_string(), json!(record.severity));
        object.insert("msg".to_string(), json!(record.message));
        if let Some(exc) = &record.exc_text {
            object.insert("exc".to_string(), json!(exc));
        }
        if !record.extra.is_empty() {
            let extra: Map<String, Value> = record
                .extra
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            object.insert("extra".to_string(), Value::Object(extra));
        }
        serde_json::to_string(&Value::Object(object)).map_err(|e| EmitError::Format(e.to_string()))
    }
}

impl<F> RecordFormatter for F
where
    F: Fn(&LogRecord) -> String + Send + Sync,
{
    fn format(&self, record: &LogRecord) -> Result<String, EmitError> {
        Ok(self(record))
    }
}
