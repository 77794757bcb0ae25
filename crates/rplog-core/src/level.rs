//! Reporting-service level names
//!
//! The reporting service knows six level names. Severities are translated
//! with [`LEVEL_MAP`], scanned from the highest threshold down; the first
//! threshold at or below the severity wins and anything below every
//! threshold is TRACE.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::severity::Severity;

/// Level name understood by the reporting service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum RpLevel {
    Fatal,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Severity thresholds and their level names, highest first.
pub const LEVEL_MAP: [(Severity, RpLevel); 6] = [
    (Severity::CRITICAL, RpLevel::Fatal),
    (Severity::ERROR, RpLevel::Error),
    (Severity::WARNING, RpLevel::Warn),
    (Severity::INFO, RpLevel::Info),
    (Severity::DEBUG, RpLevel::Debug),
    (Severity::NOTSET, RpLevel::Trace),
];

impl RpLevel {
    /// Level name for a severity. Total over every integer.
    pub fn from_severity(severity: Severity) -> Self {
        LEVEL_MAP
            .iter()
            .find(|(threshold, _)| severity >= *threshold)
            .map(|(_, level)| *level)
            .unwrap_or(RpLevel::Trace)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }
}

impl From<Severity> for RpLevel {
    fn from(severity: Severity) -> Self {
        Self::from_severity(severity)
    }
}

impl fmt::Display for RpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
