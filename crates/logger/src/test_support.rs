//! Test support utilities
//!
//! This module provides utilities for capturing logs during tests.
//! It's only available when the `test-support` feature is enabled.

use crate::{AtomicLevel, Level, Logger, Record};
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

/// A logger that captures all records in memory for testing.
///
/// Clones share the captured records and the threshold.
#[derive(Clone)]
pub struct CaptureLogger {
    records: Arc<Mutex<Vec<Record>>>,
    min_level: Arc<AtomicLevel>,
}

impl CaptureLogger {
    /// Create a new capture logger accepting every level
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            min_level: Arc::new(AtomicLevel::new(Level::Trace)),
        }
    }

    /// Create with a specific level
    pub fn with_level(self, level: Level) -> Self {
        self.min_level.store(level);
        self
    }

    /// Copies of all captured records, oldest first
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    /// Captured records rendered as `LEVEL (function:line): message` lines
    pub fn logs(&self) -> String {
        self.records
            .lock()
            .iter()
            .map(|r| format!("{} ({}:{}): {}\n", r.level, r.function, r.line, r.message))
            .collect()
    }

    /// Number of captured records
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Whether nothing was captured
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Clear captured logs
    pub fn clear(&self) {
        self.records.lock().clear();
    }

    /// Check if logs contain a specific string
    pub fn contains(&self, text: &str) -> bool {
        self.logs().contains(text)
    }
}

impl Default for CaptureLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CaptureLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureLogger")
            .field("captured", &self.len())
            .field("min_level", &self.min_level.load())
            .finish()
    }
}

impl Logger for CaptureLogger {
    fn log(&self, record: Record) {
        self.records.lock().push(record);
    }

    fn set_level(&self, level: Level) {
        self.min_level.store(level);
    }

    fn level(&self) -> Level {
        self.min_level.load()
    }
}

/// In-memory writer whose clones share one buffer, for use as a console stream
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    /// Everything written so far, split into lines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Test guard that installs a capture logger globally and prints its logs
/// on test failure.
///
/// The logger that was installed before the guard is restored on drop.
pub struct TestLogGuard {
    logger: CaptureLogger,
    previous: Option<Arc<dyn Logger>>,
    test_name: String,
    printed: bool,
}

impl TestLogGuard {
    /// Create a new test log guard
    pub fn new(test_name: impl Into<String>) -> Self {
        let logger = CaptureLogger::new();
        let previous = crate::init(Arc::new(logger.clone()));

        Self {
            logger,
            previous,
            test_name: test_name.into(),
            printed: false,
        }
    }

    /// Mark that the test passed (logs won't be printed)
    pub fn passed(&mut self) {
        self.printed = true;
    }

    /// Get the capture logger
    pub fn logger(&self) -> &CaptureLogger {
        &self.logger
    }
}

impl Drop for TestLogGuard {
    fn drop(&mut self) {
        crate::set_logger(self.previous.take());

        if !self.printed && std::thread::panicking() {
            let logs = self.logger.logs();
            if !logs.is_empty() {
                eprintln!("\n===== Logs from failed test '{}' =====", self.test_name);
                eprint!("{logs}");
                eprintln!("===== End of logs =====\n");
            }
        }
    }
}
