//! Numeric severities
//!
//! Severities live on the standard logging scale (CRITICAL=50 … NOTSET=0).
//! Any integer is a valid severity; the named constants are only the
//! well-known thresholds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseSeverityError;

/// Numeric log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Severity(pub i32);

impl Severity {
    pub const NOTSET: Severity = Severity(0);
    /// `tracing`'s TRACE level; sits below DEBUG
    pub const TRACE: Severity = Severity(5);
    pub const DEBUG: Severity = Severity(10);
    pub const INFO: Severity = Severity(20);
    pub const WARNING: Severity = Severity(30);
    pub const ERROR: Severity = Severity(40);
    pub const CRITICAL: Severity = Severity(50);

    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    /// Closest `tracing` level at or below this severity.
    ///
    /// `tracing` has no CRITICAL level, so CRITICAL and above become ERROR.
    pub fn to_tracing_level(self) -> tracing::Level {
        if self >= Self::ERROR {
            tracing::Level::ERROR
        } else if self >= Self::WARNING {
            tracing::Level::WARN
        } else if self >= Self::INFO {
            tracing::Level::INFO
        } else if self >= Self::DEBUG {
            tracing::Level::DEBUG
        } else {
            tracing::Level::TRACE
        }
    }

    /// Parse a level name (case-insensitive) or an integer.
    ///
    /// Accepts `CRITICAL`/`FATAL`, `ERROR`, `WARNING`/`WARN`, `INFO`,
    /// `DEBUG`, `TRACE` and `NOTSET`.
    pub fn parse(s: &str) -> Result<Self, ParseSeverityError> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i32>() {
            return Ok(Self(value));
        }
        match trimmed.to_uppercase().as_str() {
            "CRITICAL" | "FATAL" => Ok(Self::CRITICAL),
            "ERROR" => Ok(Self::ERROR),
            "WARNING" | "WARN" => Ok(Self::WARNING),
            "INFO" => Ok(Self::INFO),
            "DEBUG" => Ok(Self::DEBUG),
            "TRACE" => Ok(Self::TRACE),
            "NOTSET" => Ok(Self::NOTSET),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::NOTSET
    }
}

impl From<tracing::Level> for Severity {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::ERROR => Self::ERROR,
            tracing::Level::WARN => Self::WARNING,
            tracing::Level::INFO => Self::INFO,
            tracing::Level::DEBUG => Self::DEBUG,
            tracing::Level::TRACE => Self::TRACE,
        }
    }
}

impl From<i32> for Severity {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::CRITICAL => write!(f, "CRITICAL"),
            Self::ERROR => write!(f, "ERROR"),
            Self::WARNING => write!(f, "WARNING"),
            Self::INFO => write!(f, "INFO"),
            Self::DEBUG => write!(f, "DEBUG"),
            Self::TRACE => write!(f, "TRACE"),
            Self::NOTSET => write!(f, "NOTSET"),
            Self(value) => write!(f, "Level {}", value),
        }
    }
}
