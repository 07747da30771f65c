//! Core logger trait

use crate::{Level, Record};

/// A sink for log records with an adjustable severity threshold.
///
/// Implementations are shared across threads behind an `Arc`, so every
/// method takes `&self` and must be safe to call concurrently.
pub trait Logger: Send + Sync + 'static {
    /// Log a record
    fn log(&self, record: Record);

    /// Replace the minimum level this logger accepts
    fn set_level(&self, level: Level);

    /// Current minimum level
    fn level(&self) -> Level;

    /// Flush any buffered output
    fn flush(&self) {}

    /// Check if a level passes both the compile-time filter and this logger's threshold
    #[inline(always)]
    fn is_enabled(&self, level: Level) -> bool {
        level.is_enabled_static() && level >= self.level()
    }
}

/// Logger that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline(always)]
    fn log(&self, _record: Record) {}

    #[inline(always)]
    fn set_level(&self, _level: Level) {}

    #[inline(always)]
    fn level(&self) -> Level {
        Level::Critical
    }

    #[inline(always)]
    fn is_enabled(&self, _level: Level) -> bool {
        false
    }
}
