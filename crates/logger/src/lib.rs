//! Minimal logging facade.
//!
//! A process-wide, swappable [`Logger`] receives [`Record`]s from the call-site
//! macros ([`log!`], [`info!`], ...). Calls are filtered three times before
//! any work is done: against the compile-time minimum level (the
//! `max-level-*` features), against the presence of a global logger, and
//! against that logger's runtime threshold.
//!
//! ```
//! use logiface::{ConsoleLogger, Level, info, set_logger};
//! use std::sync::Arc;
//!
//! set_logger(Some(Arc::new(ConsoleLogger::new().with_level(Level::Debug))));
//! info!("listening on port {}", 8080);
//! ```
//!
//! Set `LOGIFACE_PROJECT_ROOT` while building to shorten the file paths
//! recorded at call sites.

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod error;
mod level;
mod logger;
mod macros;
mod record;
mod registry;

#[cfg(feature = "console")]
mod console;

#[cfg(any(feature = "log-compat", feature = "tracing-compat"))]
pub mod compat;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

#[cfg(any(feature = "log-compat", feature = "tracing-compat"))]
pub use error::BridgeError;
pub use error::ParseLevelError;
pub use level::{AtomicLevel, Level};
pub use logger::{Logger, NoOpLogger};
pub use record::{Record, strip_project_root};
pub use registry::{enabled, get_logger, init, set_logger, take_logger};

#[cfg(feature = "console")]
pub use console::{ConsoleLogger, ConsoleLoggerBuilder, format_record};

/// Project root baked in when this crate was built, used for bridged records
#[cfg(any(feature = "log-compat", feature = "tracing-compat"))]
pub(crate) const PROJECT_ROOT: Option<&str> = option_env!("LOGIFACE_PROJECT_ROOT");

/// Last `::` segment of a path, skipping closure markers
pub(crate) fn last_path_segment(path: &str) -> &str {
    path.rsplit("::")
        .find(|segment| !segment.is_empty() && *segment != "{{closure}}")
        .unwrap_or(path)
}

#[doc(hidden)]
pub mod __private_api {
    use crate::{Record, registry, strip_project_root};

    /// Static call-site data, all known at compile time
    pub struct CallSite {
        pub target: &'static str,
        pub file: &'static str,
        pub line: u32,
        /// Type name of a marker item declared inside the calling function
        pub function_path: &'static str,
        pub project_root: Option<&'static str>,
    }

    impl CallSite {
        fn function(&self) -> &'static str {
            let path = self.function_path;
            crate::last_path_segment(path.rsplit_once("::").map_or(path, |(outer, _)| outer))
        }
    }

    /// Runtime half of the emission path; the macros have already applied the
    /// compile-time filter.
    #[inline]
    pub fn log<F>(level: crate::Level, callsite: &CallSite, message: F)
    where
        F: FnOnce() -> String,
    {
        let Some(logger) = registry::get_logger() else {
            return;
        };
        if !logger.is_enabled(level) {
            return;
        }

        let file = strip_project_root(callsite.file, callsite.project_root.unwrap_or(""));
        let record = Record::new(level, message())
            .with_target(callsite.target)
            .with_location(file, callsite.line)
            .with_function(callsite.function());
        logger.log(record);
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn site(function_path: &'static str) -> CallSite {
            CallSite {
                target: "app",
                file: "src/main.rs",
                line: 1,
                function_path,
                project_root: None,
            }
        }

        #[test]
        fn test_function_from_marker_path() {
            assert_eq!(site("app::db::Flush::__logiface_marker").function(), "Flush");
            assert_eq!(site("app::run::{{closure}}::__logiface_marker").function(), "run");
            assert_eq!(
                site("app::run::{{closure}}::{{closure}}::__logiface_marker").function(),
                "run"
            );
            assert_eq!(site("main::__logiface_marker").function(), "main");
        }
    }
}
