//! Severity levels and the compile-time level filter

use crate::error::ParseLevelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

/// Log severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    /// Very fine-grained diagnostics
    Trace = 0,
    /// Debugging information
    Debug = 1,
    /// Normal operational messages
    Info = 2,
    /// Something unexpected that the program recovered from
    Warn = 3,
    /// An operation failed
    Error = 4,
    /// The program cannot continue normally
    Critical = 5,
}

/// Ordinal one past `Critical`, used when logging is compiled out entirely
const OFF: u8 = 6;

/// Lowest level compiled into call sites, selected with the `max-level-*` features.
/// The most restrictive enabled feature wins.
const STATIC_MIN: u8 = if cfg!(feature = "max-level-off") {
    OFF
} else if cfg!(feature = "max-level-critical") {
    Level::Critical as u8
} else if cfg!(feature = "max-level-error") {
    Level::Error as u8
} else if cfg!(feature = "max-level-warn") {
    Level::Warn as u8
} else if cfg!(feature = "max-level-info") {
    Level::Info as u8
} else if cfg!(feature = "max-level-debug") {
    Level::Debug as u8
} else {
    Level::Trace as u8
};

impl Level {
    /// All levels in ascending order of severity
    pub const ALL: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Critical,
    ];

    /// Upper-case display name
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }

    /// Level for an ordinal, `None` when out of range
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Level> {
        match value {
            0 => Some(Level::Trace),
            1 => Some(Level::Debug),
            2 => Some(Level::Info),
            3 => Some(Level::Warn),
            4 => Some(Level::Error),
            5 => Some(Level::Critical),
            _ => None,
        }
    }

    /// Check the level against the compile-time filter.
    ///
    /// This is a `const` comparison, so a call site with a literal level is
    /// folded away by the compiler when the level is filtered out.
    #[inline(always)]
    pub const fn is_enabled_static(self) -> bool {
        self as u8 >= STATIC_MIN
    }

    /// Lowest level compiled in, or `None` when logging is disabled at build time
    #[inline]
    pub const fn static_min() -> Option<Level> {
        Level::from_u8(STATIC_MIN)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" | "err" => Ok(Level::Error),
            "critical" | "crit" | "fatal" => Ok(Level::Critical),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// A level threshold that can be read and replaced concurrently
#[derive(Debug)]
pub struct AtomicLevel(AtomicU8);

impl AtomicLevel {
    /// Create a threshold starting at `level`
    pub const fn new(level: Level) -> Self {
        Self(AtomicU8::new(level as u8))
    }

    /// Current threshold
    #[inline]
    pub fn load(&self) -> Level {
        // Only valid ordinals are ever stored
        Level::from_u8(self.0.load(Ordering::Relaxed)).unwrap_or(Level::Critical)
    }

    /// Replace the threshold
    #[inline]
    pub fn store(&self, level: Level) {
        self.0.store(level as u8, Ordering::Relaxed);
    }
}

impl Default for AtomicLevel {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}
