//! Unit tests for log.rs

use crate::log::{DefaultLogger, Log, LogEntry, LogSeverity, Logger};
use serial_test::serial;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn install_capture() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Log::set_logger(CaptureLogger { entries: entries.clone() });
    entries
}

/// Entries from this file only; other unit tests may log concurrently.
fn captured_from_tests(entries: &Arc<Mutex<Vec<LogEntry>>>) -> Vec<LogEntry> {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|entry| entry.source == "mapview::test")
        .cloned()
        .collect()
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
fn test_log_severity_labels_are_fixed_width() {
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        assert_eq!(severity.label().len(), 5);
    }
    assert_eq!(LogSeverity::Info.label(), "INFO ");
}

// ============================================================================
// DEFAULT LOGGER
// ============================================================================

#[test]
fn test_default_logger_handles_both_formats() {
    let logger = DefaultLogger;
    logger.log(&LogEntry {
        severity: LogSeverity::Debug,
        timestamp: SystemTime::now(),
        source: "mapview::test".to_string(),
        message: "plain entry".to_string(),
        file: None,
        line: None,
    });
    logger.log(&LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "mapview::test".to_string(),
        message: "located entry".to_string(),
        file: Some("view_state.rs"),
        line: Some(12),
    });
}

// ============================================================================
// MACROS
// ============================================================================

#[test]
#[serial]
fn test_macros_route_to_global_logger() {
    let entries = install_capture();

    crate::view_debug!("mapview::test", "near {} far {}", 1, 2);
    crate::view_warn!("mapview::test", "fallback up vector");

    {
        let captured = captured_from_tests(&entries);
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].severity, LogSeverity::Debug);
        assert_eq!(captured[0].message, "near 1 far 2");
        assert!(captured[0].file.is_none());
        assert_eq!(captured[1].severity, LogSeverity::Warn);
    }

    Log::reset_logger();
}

#[test]
#[serial]
fn test_error_macro_records_location() {
    let entries = install_capture();

    crate::view_error!("mapview::test", "failed: {}", "reason");

    {
        let captured = captured_from_tests(&entries);
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].severity, LogSeverity::Error);
        assert!(captured[0].file.unwrap().ends_with("log_tests.rs"));
        assert!(captured[0].line.is_some());
    }

    Log::reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_detaches_capture() {
    let entries = install_capture();
    Log::reset_logger();

    Log::log(LogSeverity::Info, "mapview::test", "after reset".to_string());

    assert!(captured_from_tests(&entries).is_empty());
}
