//! Records as handlers see them
//!
//! Attributes of the rebuilt `LogRecord` after a full trip through the subscriber.

use pretty_assertions::assert_eq;
use rplog_core::{LogRecord, RpLevel, Severity};
use rplog_tracing::{CallArgs, LogOptions, RpLayer, RpLogger};
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use tests::fixtures::{StepError, BUILD_LOG};
use tests::CaptureHandler;
use tracing_subscriber::layer::SubscriberExt;

fn capture<F: FnOnce()>(f: F) -> Vec<LogRecord> {
    let handler = Arc::new(CaptureHandler::new());
    let subscriber = tracing_subscriber::registry().with(RpLayer::new(handler.clone()));
    tracing::subscriber::with_default(subscriber, f);
    handler.records()
}

#[test]
fn records_without_options_carry_defaults() {
    let records = capture(|| {
        RpLogger::new("behave").info("plain", LogOptions::new());
        tracing::warn!("plain macro");
    });

    assert_eq!(records.len(), 2);
    for record in &records {
        assert!(!record.is_launch_log);
        assert_eq!(record.file_to_attach, None);
        assert!(record.extra.is_empty());
    }
    assert_eq!(records[0].name, "behave");
    assert_eq!(records[0].severity, Severity::INFO);
    assert_eq!(records[1].severity, Severity::WARNING);
}

#[test]
fn options_and_extras_are_split_onto_the_record() {
    let records = capture(|| {
        RpLogger::new("behave").log_with(
            Severity::CRITICAL,
            "fatal crash",
            CallArgs::new().with_extra("suite", "smoke"),
            LogOptions::attach(BUILD_LOG).with_launch_log(true),
        );
    });

    let record = &records[0];
    assert_eq!(record.severity, Severity::CRITICAL);
    assert_eq!(record.rp_level(), RpLevel::Fatal);
    assert!(record.is_launch_log);
    assert_eq!(record.file_to_attach.as_deref(), Some(Path::new(BUILD_LOG)));
    assert_eq!(record.extra.len(), 1);
    assert_eq!(record.extra["suite"], json!("smoke"));
}

#[test]
fn exception_text_stays_apart_from_the_message() {
    let err = StepError::new("upload", "disk full");
    let records = capture(|| {
        RpLogger::new("behave").exception("upload failed", &err, LogOptions::new());
    });

    let record = &records[0];
    assert_eq!(record.message, "upload failed");
    assert_eq!(
        record.exc_text.as_deref(),
        Some("step 'upload' failed\nCaused by: disk full")
    );
    assert_eq!(record.stack_info, None);
}

#[test]
fn numeric_launch_flag_on_plain_macros() {
    let records = capture(|| {
        tracing::error!(is_launch_log = 1, "launch aborted");
        tracing::error!(is_launch_log = 0, "item failed");
    });

    assert!(records[0].is_launch_log);
    assert!(!records[1].is_launch_log);
    assert!(records.iter().all(|r| r.extra.is_empty()));
}
