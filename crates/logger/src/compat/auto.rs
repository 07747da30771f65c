//! Install every available bridge at once

use crate::{BridgeError, Logger};
use std::sync::Arc;

/// Install `logger` globally and route both `log` and `tracing` events to it
///
/// # Example
/// ```no_run
/// use logiface::{ConsoleLogger, compat::init_with_bridges};
/// use std::sync::Arc;
///
/// init_with_bridges(Arc::new(ConsoleLogger::new())).expect("Failed to init with bridges");
/// log::info!("From log crate");
/// tracing::info!("From tracing crate");
/// ```
pub fn init_with_bridges(logger: Arc<dyn Logger>) -> Result<(), BridgeError> {
    crate::set_logger(Some(logger));
    super::log_bridge::init_log_bridge()?;
    super::tracing_bridge::init_tracing_bridge()?;
    Ok(())
}
