//! Client failure handling
//!
//! A failing client never breaks the caller; each record is attempted once.

use rplog_core::{Handler, LogRecord, RpHandler, Severity};
use rplog_tracing::{LogOptions, RpLogger};
use std::sync::Arc;
use tests::fixtures::BUILD_LOG;
use tests::{FailingClient, ReporterTestHarness};

#[test]
fn failing_client_does_not_reach_the_caller() {
    let harness = ReporterTestHarness::new(FailingClient::new());

    let finished = harness.run(|| {
        let logger = RpLogger::new("behave");
        logger.error("first", LogOptions::attach(BUILD_LOG));
        logger.critical("second", LogOptions::launch());
        true
    });

    assert!(finished);
    assert_eq!(harness.client.attempts(), 2);
}

#[test]
fn failing_client_is_attempted_once_and_reported() {
    let client = Arc::new(FailingClient::new());
    let handler = RpHandler::new(client.clone());

    let record = LogRecord::new("behave", Severity::INFO, "post me");
    // Passed the threshold; the failure goes to stderr, not the caller
    assert!(handler.handle(&record));
    assert_eq!(client.attempts(), 1);
}

#[test]
fn emit_error_names_the_operation() {
    let client = Arc::new(FailingClient::new());
    let handler = RpHandler::new(client);

    let mut record = LogRecord::new("behave", Severity::ERROR, "post me");
    record.is_launch_log = true;

    let err = handler.emit(&record).unwrap_err();
    assert!(err.to_string().contains("post_launch_log"));
    let chain = format!("{:#}", anyhow::Error::new(err));
    assert!(chain.contains("503 Service Unavailable"));
}

#[test]
fn later_records_still_dispatch_after_a_failure() {
    let harness = ReporterTestHarness::new(FailingClient::new());

    harness.run(|| {
        let logger = RpLogger::new("behave");
        for i in 0..5 {
            logger.warning(format!("retry {i}"), LogOptions::new());
        }
    });

    assert_eq!(harness.client.attempts(), 5);
}
