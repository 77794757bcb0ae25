//! Log records and the two reporting extensions
//!
//! A [`LogRecord`] always carries `file_to_attach` and `is_launch_log`.
//! Both start at their defaults (absent, `false`) and are only overwritten
//! when the extra-fields mapping names them under the fixed [`keys`].

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::level::RpLevel;
use crate::severity::Severity;

/// Caller-supplied extra fields, keyed by field name
pub type Extra = BTreeMap<String, Value>;

/// Fixed extra-field keys recognised on every record
pub mod keys {
    pub const FILE_TO_ATTACH: &str = "file_to_attach";
    pub const IS_LAUNCH_LOG: &str = "is_launch_log";
}

// ============================================================================
// LogOptions
// ============================================================================

/// Reporting extensions for a single log call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// File to upload alongside the entry
    pub file_to_attach: Option<PathBuf>,
    /// Report against the whole launch instead of the current test item
    pub is_launch_log: bool,
}

impl LogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options carrying only an attachment
    pub fn attach(path: impl Into<PathBuf>) -> Self {
        Self::new().with_attachment(path)
    }

    /// Options marking the entry as a launch log
    pub fn launch() -> Self {
        Self::new().with_launch_log(true)
    }

    pub fn with_attachment(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_to_attach = Some(path.into());
        self
    }

    pub fn with_launch_log(mut self, is_launch_log: bool) -> Self {
        self.is_launch_log = is_launch_log;
        self
    }

    /// True when neither extension was supplied
    pub fn is_empty(&self) -> bool {
        self.file_to_attach.is_none() && !self.is_launch_log
    }

    /// Merge supplied extensions into `extra` under the fixed keys.
    ///
    /// Only supplied options are written; other entries are left alone.
    pub fn merge_into(&self, extra: &mut Extra) {
        if let Some(path) = &self.file_to_attach {
            extra.insert(
                keys::FILE_TO_ATTACH.to_string(),
                Value::String(path.to_string_lossy().into_owned()),
            );
        }
        if self.is_launch_log {
            extra.insert(keys::IS_LAUNCH_LOG.to_string(), Value::Bool(true));
        }
    }
}

// ============================================================================
// LogRecord
// ============================================================================

/// A single log event on its way to a handler
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Logger name (or `tracing` target)
    pub name: String,
    pub severity: Severity,
    /// Rendered message
    pub message: String,
    pub created: DateTime<Utc>,
    pub module_path: Option<String>,
    pub file: Option<String>,
    pub line: Option<u32>,
    /// Extra fields other than the two reporting extensions
    pub extra: Extra,
    /// Rendered exception / error chain
    pub exc_text: Option<String>,
    /// Rendered call stack
    pub stack_info: Option<String>,
    pub is_launch_log: bool,
    pub file_to_attach: Option<PathBuf>,
}

impl LogRecord {
    /// Create a record with both reporting extensions at their defaults
    pub fn new(name: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            severity,
            message: message.into(),
            created: Utc::now(),
            module_path: None,
            file: None,
            line: None,
            extra: Extra::new(),
            exc_text: None,
            stack_info: None,
            is_launch_log: false,
            file_to_attach: None,
        }
    }

    /// Apply an extra-fields mapping.
    ///
    /// `file_to_attach` and `is_launch_log` are lifted onto the record;
    /// every other entry is kept in [`LogRecord::extra`]. The flag is set by
    /// `true`, the string `"true"` or a non-zero number; a non-string
    /// attachment or any other flag value leaves the default in place.
    pub fn with_extra(mut self, mut extra: Extra) -> Self {
        if let Some(value) = extra.remove(keys::FILE_TO_ATTACH) {
            self.file_to_attach = attachment_from_value(value);
        }
        if let Some(value) = extra.remove(keys::IS_LAUNCH_LOG) {
            self.is_launch_log = flag_from_value(&value);
        }
        self.extra.extend(extra);
        self
    }

    pub fn with_location(
        mut self,
        module_path: Option<&str>,
        file: Option<&str>,
        line: Option<u32>,
    ) -> Self {
        self.module_path = module_path.map(str::to_string);
        self.file = file.map(str::to_string);
        self.line = line;
        self
    }

    pub fn with_exc_text(mut self, exc_text: Option<String>) -> Self {
        self.exc_text = exc_text;
        self
    }

    pub fn with_stack_info(mut self, stack_info: Option<String>) -> Self {
        self.stack_info = stack_info;
        self
    }

    /// Reporting-service level name for this record
    pub fn rp_level(&self) -> RpLevel {
        RpLevel::from_severity(self.severity)
    }
}

fn attachment_from_value(value: Value) -> Option<PathBuf> {
    match value {
        Value::String(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => None,
    }
}

fn flag_from_value(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    }
}
