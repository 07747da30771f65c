//! Bridge from the `log` crate to the global logger

use crate::{Level, PROJECT_ROOT, Record, get_logger, last_path_segment, strip_project_root};
use log::{Log, Metadata, Record as LogRecord};

/// Implements the `log` crate's `Log` trait on top of the global logger
#[derive(Debug, Default, Clone, Copy)]
pub struct LogBridge;

static BRIDGE: LogBridge = LogBridge;

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        crate::enabled(map_level(metadata.level()))
    }

    fn log(&self, record: &LogRecord) {
        let level = map_level(record.level());
        if !level.is_enabled_static() {
            return;
        }
        let Some(logger) = get_logger() else {
            return;
        };
        if !logger.is_enabled(level) {
            return;
        }

        // Only 'static metadata can be carried in a Record
        let target = record.module_path_static().unwrap_or("log");
        let file = record.file_static().unwrap_or("<unknown>");
        let file = strip_project_root(file, PROJECT_ROOT.unwrap_or(""));

        let bridged = Record::new(level, record.args().to_string())
            .with_target(target)
            .with_location(file, record.line().unwrap_or(0))
            .with_function(last_path_segment(target));
        logger.log(bridged);
    }

    fn flush(&self) {
        if let Some(logger) = get_logger() {
            logger.flush();
        }
    }
}

/// Map log levels to our levels
pub fn map_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warn,
        log::Level::Info => Level::Info,
        log::Level::Debug => Level::Debug,
        log::Level::Trace => Level::Trace,
    }
}

/// `log` filter matching the compile-time minimum level
pub fn static_level_filter() -> log::LevelFilter {
    match Level::static_min() {
        None => log::LevelFilter::Off,
        Some(Level::Critical | Level::Error) => log::LevelFilter::Error,
        Some(Level::Warn) => log::LevelFilter::Warn,
        Some(Level::Info) => log::LevelFilter::Info,
        Some(Level::Debug) => log::LevelFilter::Debug,
        Some(Level::Trace) => log::LevelFilter::Trace,
    }
}

/// Route the `log` crate's macros to the global logger
///
/// This will capture all logs from crates using the `log` crate macros.
///
/// # Example
/// ```no_run
/// use logiface::{ConsoleLogger, compat::log_bridge::init_log_bridge, set_logger};
/// use std::sync::Arc;
///
/// set_logger(Some(Arc::new(ConsoleLogger::new())));
/// init_log_bridge().expect("Failed to set log bridge");
/// ```
pub fn init_log_bridge() -> Result<(), log::SetLoggerError> {
    log::set_logger(&BRIDGE)?;
    log::set_max_level(static_level_filter());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_level_preserves_order() {
        let mapped: Vec<_> = [
            log::Level::Trace,
            log::Level::Debug,
            log::Level::Info,
            log::Level::Warn,
            log::Level::Error,
        ]
        .into_iter()
        .map(map_level)
        .collect();
        assert!(mapped.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(mapped[4], Level::Error);
    }
}
