//! Reporting client interface
//!
//! The client is owned and configured outside RpLog; the handler only calls
//! the two posting operations below. Implementations must be safe to call
//! from any thread.

use std::path::Path;
use std::sync::Arc;

use crate::level::RpLevel;

/// Result type for reporting client operations
pub type ClientResult<T> = anyhow::Result<T>;

/// Service-facing client with two log-posting operations
pub trait ReportingClient: Send + Sync {
    /// Post an entry against the current test item
    fn post_log(
        &self,
        message: &str,
        level: RpLevel,
        file_to_attach: Option<&Path>,
    ) -> ClientResult<()>;

    /// Post an entry against the whole launch
    fn post_launch_log(
        &self,
        message: &str,
        level: RpLevel,
        file_to_attach: Option<&Path>,
    ) -> ClientResult<()>;
}

macro_rules! forward_client {
    ($($ptr:ident),*) => {$(
        impl<C: ReportingClient + ?Sized> ReportingClient for $ptr<C> {
            fn post_log(
                &self,
                message: &str,
                level: RpLevel,
                file_to_attach: Option<&Path>,
            ) -> ClientResult<()> {
                (**self).post_log(message, level, file_to_attach)
            }

            fn post_launch_log(
                &self,
                message: &str,
                level: RpLevel,
                file_to_attach: Option<&Path>,
            ) -> ClientResult<()> {
                (**self).post_launch_log(message, level, file_to_attach)
            }
        }
    )*};
}

forward_client!(Arc, Box);
