//! Compatibility bridges for other logging crates
//!
//! Both bridges forward into whatever logger is currently installed with
//! [`set_logger`](crate::set_logger), so the global logger can still be
//! swapped after a bridge is installed.

#[cfg(feature = "log-compat")]
pub mod log_bridge;

#[cfg(feature = "tracing-compat")]
pub mod tracing_bridge;

#[cfg(all(feature = "log-compat", feature = "tracing-compat"))]
mod auto;

#[cfg(all(feature = "log-compat", feature = "tracing-compat"))]
pub use auto::*;
