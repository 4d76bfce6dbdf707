//! Unit tests for the Engine logging API
//!
//! LOGGER is a global OnceLock shared across all tests, so every test that
//! installs a logger is marked #[serial]. Camera tests may log concurrently,
//! so captured entries are filtered by source.

use crate::galaxy3d::Engine;
use crate::galaxy3d::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

const SOURCE: &str = "test::engine_tests";

/// Captures entries emitted from SOURCE
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        if entry.source == SOURCE {
            self.entries.lock().unwrap().push(entry.clone());
        }
    }
}

// ============================================================================
// LOGGER TESTS
// ============================================================================

#[test]
#[serial]
fn test_default_logger_logs_without_panic() {
    Engine::reset_logger();
    Engine::log(LogSeverity::Info, SOURCE, "default logger".to_string());
    Engine::log_detailed(LogSeverity::Error, SOURCE, "with location".to_string(), file!(), line!());
}

#[test]
#[serial]
fn test_custom_logger_receives_logs() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    Engine::log(LogSeverity::Debug, SOURCE, "first".to_string());
    Engine::log(LogSeverity::Warn, SOURCE, "second".to_string());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].severity, LogSeverity::Debug);
        assert_eq!(captured[0].message, "first");
        assert!(captured[0].file.is_none());
        assert_eq!(captured[1].severity, LogSeverity::Warn);
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_log_detailed_with_file_line() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    Engine::log_detailed(LogSeverity::Error, SOURCE, "boom".to_string(), "camera.rs", 77);

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].file, Some("camera.rs"));
        assert_eq!(captured[0].line, Some(77));
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_macros_route_through_engine() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    crate::engine_trace!(SOURCE, "trace {}", 1);
    crate::engine_warn!(SOURCE, "warn {}", 2);
    crate::engine_error!(SOURCE, "error {}", 3);

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 3);
        assert_eq!(captured[0].message, "trace 1");
        assert_eq!(captured[1].severity, LogSeverity::Warn);
        assert_eq!(captured[2].severity, LogSeverity::Error);
        assert!(captured[2].file.is_some());
        assert!(captured[2].line.is_some());
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_stops_capture() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);
    Engine::reset_logger();

    Engine::log(LogSeverity::Info, SOURCE, "after reset".to_string());

    assert!(entries.lock().unwrap().is_empty());
}
