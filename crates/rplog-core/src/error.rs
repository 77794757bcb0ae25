//! Error types

use std::fmt;
use thiserror::Error;

/// Which reporting-client operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientOperation {
    PostLog,
    PostLaunchLog,
}

impl ClientOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PostLog => "post_log",
            Self::PostLaunchLog => "post_launch_log",
        }
    }
}

impl fmt::Display for ClientOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure while emitting a single record
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to format log record: {0}")]
    Format(String),

    #[error("reporting client {operation} failed")]
    Client {
        operation: ClientOperation,
        #[source]
        source: anyhow::Error,
    },
}

impl EmitError {
    pub fn client(operation: ClientOperation, source: anyhow::Error) -> Self {
        Self::Client { operation, source }
    }
}

/// Level name or number that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level: {0}")]
pub struct ParseSeverityError(pub String);
