//! Log record type

use crate::Level;
use chrono::{DateTime, Utc};

/// One log event.
///
/// Built once per emitted call and handed by value to [`Logger::log`](crate::Logger::log).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Log level
    pub level: Level,
    /// The fully formatted message
    pub message: String,
    /// When the record was created
    pub timestamp: DateTime<Utc>,
    /// Module path of the call site
    pub target: &'static str,
    /// Source file, with the project root stripped when configured
    pub file: &'static str,
    /// Name of the enclosing function
    pub function: &'static str,
    /// Line number
    pub line: u32,
}

impl Record {
    /// Create a record stamped with the current time and no call-site information
    #[inline]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
            target: "",
            file: "",
            function: "",
            line: 0,
        }
    }

    /// Builder-style method for setting target
    #[inline]
    pub fn with_target(mut self, target: &'static str) -> Self {
        self.target = target;
        self
    }

    /// Builder-style method for setting location
    #[inline]
    pub fn with_location(mut self, file: &'static str, line: u32) -> Self {
        self.file = file;
        self.line = line;
        self
    }

    /// Builder-style method for setting the enclosing function
    #[inline]
    pub fn with_function(mut self, function: &'static str) -> Self {
        self.function = function;
        self
    }

    /// Builder-style method for replacing the timestamp
    #[inline]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Remove `root` and one following path separator from the front of `file`.
///
/// Paths outside `root`, and any path when `root` is empty, are returned unchanged.
pub fn strip_project_root<'a>(file: &'a str, root: &str) -> &'a str {
    if root.is_empty() {
        return file;
    }
    match file.strip_prefix(root) {
        Some(rest) => rest
            .strip_prefix('/')
            .or_else(|| rest.strip_prefix('\\'))
            .unwrap_or(rest),
        None => file,
    }
}
