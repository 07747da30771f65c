//! Thread-safe console logger

use crate::{AtomicLevel, Level, Logger, Record};
use chrono::Local;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};

type Stream = Box<dyn Write + Send>;

struct Streams {
    out: Stream,
    err: Stream,
}

/// Logger writing one line per record, `Warn` and above to the error stream.
///
/// Lines look like `[2024-03-01 12:00:00] CRITICAL (flush:42): disk full`,
/// with the timestamp in local time. Writes from concurrent callers are
/// serialized, so lines never interleave.
pub struct ConsoleLogger {
    /// Minimum log level
    min_level: AtomicLevel,
    /// Lock for both streams (to prevent interleaving)
    streams: Mutex<Streams>,
}

impl ConsoleLogger {
    /// Logger at `Info` writing to stdout and stderr
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Logger at `level` writing to the given streams
    pub fn with_writers<O, E>(level: Level, out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self::builder().level(level).stdout(out).stderr(err).build()
    }

    /// Start configuring a logger
    pub fn builder() -> ConsoleLoggerBuilder {
        ConsoleLoggerBuilder::default()
    }

    /// Create with a specific minimum level
    pub fn with_level(self, level: Level) -> Self {
        self.min_level.store(level);
        self
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("min_level", &self.min_level.load())
            .finish_non_exhaustive()
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, record: Record) {
        let mut streams = self.streams.lock();
        let line = format_record(&record);
        let stream = if uses_error_stream(record.level) {
            &mut streams.err
        } else {
            &mut streams.out
        };

        // Output failures are not reported
        let _ = stream.write_all(line.as_bytes());
        let _ = stream.flush();
    }

    fn set_level(&self, level: Level) {
        self.min_level.store(level);
    }

    fn level(&self) -> Level {
        self.min_level.load()
    }

    fn flush(&self) {
        let mut streams = self.streams.lock();
        let _ = streams.out.flush();
        let _ = streams.err.flush();
    }
}

/// Render `record` as one newline-terminated console line
pub fn format_record(record: &Record) -> String {
    format!(
        "[{}] {} ({}:{}): {}\n",
        record.timestamp.with_timezone(&Local).format("%F %T"),
        record.level,
        record.function,
        record.line,
        record.message
    )
}

#[inline]
fn uses_error_stream(level: Level) -> bool {
    level >= Level::Warn
}

/// Configuration for a [`ConsoleLogger`]
pub struct ConsoleLoggerBuilder {
    level: Level,
    out: Option<Stream>,
    err: Option<Stream>,
}

impl Default for ConsoleLoggerBuilder {
    fn default() -> Self {
        Self {
            level: Level::Info,
            out: None,
            err: None,
        }
    }
}

impl fmt::Debug for ConsoleLoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLoggerBuilder")
            .field("level", &self.level)
            .field("custom_out", &self.out.is_some())
            .field("custom_err", &self.err.is_some())
            .finish()
    }
}

impl ConsoleLoggerBuilder {
    /// Initial threshold (default `Info`)
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Destination for `Trace`, `Debug` and `Info` (default stdout)
    pub fn stdout<W: Write + Send + 'static>(mut self, out: W) -> Self {
        self.out = Some(Box::new(out));
        self
    }

    /// Destination for `Warn` and above (default stderr)
    pub fn stderr<W: Write + Send + 'static>(mut self, err: W) -> Self {
        self.err = Some(Box::new(err));
        self
    }

    /// Build the logger
    pub fn build(self) -> ConsoleLogger {
        ConsoleLogger {
            min_level: AtomicLevel::new(self.level),
            streams: Mutex::new(Streams {
                out: self.out.unwrap_or_else(|| Box::new(io::stdout())),
                err: self.err.unwrap_or_else(|| Box::new(io::stderr())),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::SharedBuffer;
    use chrono::{TimeZone, Utc};

    fn console(level: Level) -> (ConsoleLogger, SharedBuffer, SharedBuffer) {
        let out = SharedBuffer::new();
        let err = SharedBuffer::new();
        let logger = ConsoleLogger::with_writers(level, out.clone(), err.clone());
        (logger, out, err)
    }

    #[test]
    fn test_format() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap();
        let record = Record::new(Level::Critical, "disk full")
            .with_function("Flush")
            .with_location("src/store.rs", 42)
            .with_timestamp(ts);

        let expected_time = ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string();
        assert_eq!(
            format_record(&record),
            format!("[{expected_time}] CRITICAL (Flush:42): disk full\n")
        );
    }

    #[test]
    fn test_defaults() {
        let logger = ConsoleLogger::new();
        assert_eq!(logger.level(), Level::Info);
        assert!(format!("{logger:?}").contains("Info"));
    }

    #[test]
    fn test_routing() {
        let (logger, out, err) = console(Level::Trace);
        for level in Level::ALL {
            logger.log(Record::new(level, level.as_str().to_lowercase()));
        }

        let out = out.contents();
        let err = err.contents();
        for name in ["trace", "debug", "info"] {
            assert!(out.contains(&format!(": {name}\n")), "{name} missing from stdout");
            assert!(!err.contains(&format!(": {name}\n")));
        }
        for name in ["warn", "error", "critical"] {
            assert!(err.contains(&format!(": {name}\n")), "{name} missing from stderr");
            assert!(!out.contains(&format!(": {name}\n")));
        }
    }

    #[test]
    fn test_set_level_round_trip() {
        let (logger, _, _) = console(Level::Info);
        for level in Level::ALL {
            logger.set_level(level);
            assert_eq!(logger.level(), level);
        }
    }

    #[test]
    fn test_builder_with_level() {
        let logger = ConsoleLogger::builder().level(Level::Error).build().with_level(Level::Debug);
        assert_eq!(logger.level(), Level::Debug);
    }

    #[test]
    fn test_broken_stream_is_silent() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }
            fn flush(&mut self) -> io::Result<()> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }
        }

        let logger = ConsoleLogger::with_writers(Level::Trace, Broken, Broken);
        logger.log(Record::new(Level::Error, "nobody hears this"));
        logger.flush();
        // The lock was released despite the failure
        logger.log(Record::new(Level::Info, "or this"));
    }
}
