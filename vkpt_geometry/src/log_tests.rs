//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, DefaultLogger and the macros.

use crate::log::{self, Logger, LogEntry, LogSeverity, DefaultLogger};
use serial_test::serial;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "vkpt::test".to_string(),
        message: format!("{:?} message", severity),
        file,
        line,
    }
}

/// Captures entries from `vkpt::test*` sources, ignoring unrelated library output
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CaptureLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        if entry.source.starts_with("vkpt::test") {
            self.entries.lock().unwrap().push(entry.clone());
        }
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_debug() {
    assert_eq!(format!("{:?}", LogSeverity::Trace), "Trace");
    assert_eq!(format!("{:?}", LogSeverity::Warn), "Warn");
    assert_eq!(format!("{:?}", LogSeverity::Error), "Error");
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_with_file_line() {
    let e = entry(LogSeverity::Error, Some("projector.rs"), Some(42));

    assert_eq!(e.severity, LogSeverity::Error);
    assert_eq!(e.source, "vkpt::test");
    assert_eq!(e.file, Some("projector.rs"));
    assert_eq!(e.line, Some(42));
}

#[test]
fn test_log_entry_clone() {
    let e1 = entry(LogSeverity::Warn, None, None);
    let e2 = e1.clone();

    assert_eq!(e1.severity, e2.severity);
    assert_eq!(e1.message, e2.message);
    assert!(e2.file.is_none());
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger;

    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        // Both branches (with and without file:line) must not panic
        logger.log(&entry(severity, None, None));
        logger.log(&entry(severity, Some("test.rs"), Some(7)));
    }
}

#[test]
fn test_logger_trait_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DefaultLogger>();
    assert_send_sync::<CaptureLogger>();
}

// ============================================================================
// GLOBAL LOGGER + MACROS
// ============================================================================

#[test]
#[serial]
fn test_warn_macro_reaches_custom_logger() {
    let (logger, entries) = CaptureLogger::new();
    log::set_logger(logger);

    crate::vkpt_warn!("vkpt::test::warn", "w is zero for {}", 3);

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].severity, LogSeverity::Warn);
        assert_eq!(captured[0].source, "vkpt::test::warn");
        assert_eq!(captured[0].message, "w is zero for 3");
        assert!(captured[0].file.is_none());
    }

    log::reset_logger();
}

#[test]
#[serial]
fn test_error_macro_records_location() {
    let (logger, entries) = CaptureLogger::new();
    log::set_logger(logger);

    crate::vkpt_error!("vkpt::test::error", "rejected");

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].severity, LogSeverity::Error);
        assert!(captured[0].file.unwrap().ends_with("log_tests.rs"));
        assert!(captured[0].line.is_some());
    }

    log::reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_stops_capture() {
    let (logger, entries) = CaptureLogger::new();
    log::set_logger(logger);

    log::dispatch(LogSeverity::Info, "vkpt::test", "first".to_string());
    log::reset_logger();
    log::dispatch(LogSeverity::Info, "vkpt::test", "second".to_string());

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].message, "first");
}
