//! Error types

use thiserror::Error;

/// A level name that does not match any [`Level`](crate::Level)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(pub String);

/// Errors from installing the compatibility bridges
#[cfg(any(feature = "log-compat", feature = "tracing-compat"))]
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Another `log` logger was already installed
    #[cfg(feature = "log-compat")]
    #[error("log bridge: {0}")]
    Log(log::SetLoggerError),

    /// Another global tracing subscriber was already installed
    #[cfg(feature = "tracing-compat")]
    #[error("tracing bridge: {0}")]
    Tracing(#[from] tracing_subscriber::util::TryInitError),
}

// `SetLoggerError` only implements `std::error::Error` with `log/std`, so it
// cannot be a `#[source]`
#[cfg(feature = "log-compat")]
impl From<log::SetLoggerError> for BridgeError {
    fn from(err: log::SetLoggerError) -> Self {
        BridgeError::Log(err)
    }
}
