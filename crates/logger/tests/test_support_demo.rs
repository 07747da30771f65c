//! Demonstrates the test support functionality
#![cfg(not(feature = "max-level-off"))]

use logiface::test_support::*;
use logiface::*;
use serial_test::serial;
use std::sync::Arc;

#[test]
fn test_capture_logger() {
    // Create a capture logger
    let capture = CaptureLogger::new();
    let logger: Arc<dyn Logger> = Arc::new(capture.clone());

    // Log directly to the logger instance
    logger.log(Record::new(Level::Info, "This is captured"));
    logger.log(Record::new(Level::Error, "This is also captured"));

    // Check the captured logs
    assert!(capture.contains("This is captured"));
    assert!(capture.contains("ERROR"));
    assert_eq!(capture.len(), 2);
}

#[test]
#[serial(global_logger)]
fn test_with_manual_guard() {
    set_logger(None);
    let mut guard = TestLogGuard::new("manual_test");

    critical!("Manual test starting");

    // Simulate some work
    for i in 0..3 {
        critical!("Iteration {i}");
    }
    assert_eq!(guard.logger().len(), 4);
    assert!(guard.logger().contains("Iteration 2"));

    // Test passes, so mark it
    guard.passed();
    drop(guard);

    // The previous (empty) slot is restored
    assert!(get_logger().is_none());
}

#[test]
#[serial(global_logger)]
fn test_guard_restores_previous_logger() {
    let outer = CaptureLogger::new();
    set_logger(Some(Arc::new(outer.clone())));

    {
        let _guard = TestLogGuard::new("nested");
        critical!("inside guard");
    }
    critical!("after guard");
    set_logger(None);

    assert!(!outer.contains("inside guard"));
    assert!(outer.contains("after guard"));
}

#[test]
#[should_panic(expected = "Test panic")]
#[serial(global_logger)]
fn test_guard_on_panic() {
    let _guard = TestLogGuard::new("panic_test");

    critical!("About to panic!");
    error!("This should be visible when test fails");

    panic!("Test panic");
    // The guard will print all logs when the test panics
}
