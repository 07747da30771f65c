//! Call-site macros.
//!
//! Every macro expands to the same guarded sequence: the compile-time level
//! check, the registry lookup, the logger's threshold check, and only then
//! message evaluation and record construction. A message expression for a
//! filtered-out call is never evaluated.

/// Log a formatted message at the given level.
///
/// ```
/// use logiface::{Level, log};
///
/// let peer = "10.0.0.7";
/// log!(Level::Warn, "connection to {peer} reset");
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {
        $crate::log_with!($level, ::std::format!($($arg)+))
    };
}

/// Log a message produced by an arbitrary expression.
///
/// The expression must evaluate to something convertible into a `String` and
/// runs only when the call passes every filter. Panics raised while
/// evaluating it propagate to the caller.
///
/// ```
/// use logiface::{Level, log_with};
///
/// fn expensive_summary() -> String {
///     "42 entries".to_string()
/// }
///
/// log_with!(Level::Debug, expensive_summary());
/// ```
#[macro_export]
macro_rules! log_with {
    ($level:expr, $message:expr) => {{
        let level: $crate::Level = $level;
        if level.is_enabled_static() {
            $crate::__private_api::log(
                level,
                &$crate::__private_api::CallSite {
                    target: ::std::module_path!(),
                    file: ::std::file!(),
                    line: ::std::line!(),
                    function_path: {
                        fn __logiface_marker() {}
                        ::std::any::type_name_of_val(&__logiface_marker)
                    },
                    project_root: ::std::option_env!("LOGIFACE_PROJECT_ROOT"),
                },
                || ::std::convert::Into::<::std::string::String>::into($message),
            );
        }
    }};
}

/// Log at [`Level::Trace`](crate::Level::Trace)
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => { $crate::log!($crate::Level::Trace, $($arg)+) };
}

/// Log at [`Level::Debug`](crate::Level::Debug)
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::log!($crate::Level::Debug, $($arg)+) };
}

/// Log at [`Level::Info`](crate::Level::Info)
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::log!($crate::Level::Info, $($arg)+) };
}

/// Log at [`Level::Warn`](crate::Level::Warn)
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => { $crate::log!($crate::Level::Warn, $($arg)+) };
}

/// Log at [`Level::Error`](crate::Level::Error)
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::log!($crate::Level::Error, $($arg)+) };
}

/// Log at [`Level::Critical`](crate::Level::Critical)
#[macro_export]
macro_rules! critical {
    ($($arg:tt)+) => { $crate::log!($crate::Level::Critical, $($arg)+) };
}

/// Whether a call at the given level would currently be emitted.
///
/// Useful to guard work that prepares several log lines at once.
#[macro_export]
macro_rules! log_enabled {
    ($level:expr) => {{
        let level: $crate::Level = $level;
        level.is_enabled_static() && $crate::enabled(level)
    }};
}
