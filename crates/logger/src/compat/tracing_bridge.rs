//! Bridge from tracing to the global logger

use crate::{Level, PROJECT_ROOT, Record, get_logger, last_path_segment, strip_project_root};
use std::fmt::Write;
use tracing::{Event, Subscriber, field::Visit};
use tracing_subscriber::{Layer, layer::Context, registry::LookupSpan};

/// A tracing layer that forwards events to the global logger
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingBridge;

impl TracingBridge {
    /// Create a new tracing bridge
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for TracingBridge
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = map_level(*metadata.level());

        // Skip if not enabled
        if !level.is_enabled_static() {
            return;
        }
        let Some(logger) = get_logger() else {
            return;
        };
        if !logger.is_enabled(level) {
            return;
        }

        // Collect the message and fields
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        // Prefix with the span path if there is one
        let spans: Vec<&str> = ctx
            .event_scope(event)
            .map(|scope| scope.from_root().map(|span| span.name()).collect())
            .unwrap_or_default();
        let message = if spans.is_empty() {
            visitor.message
        } else {
            format!("{}: {}", spans.join("::"), visitor.message)
        };

        let file = strip_project_root(
            metadata.file().unwrap_or("<unknown>"),
            PROJECT_ROOT.unwrap_or(""),
        );
        let record = Record::new(level, message)
            .with_target(metadata.target())
            .with_location(file, metadata.line().unwrap_or(0))
            .with_function(last_path_segment(metadata.module_path().unwrap_or(metadata.target())));

        logger.log(record);
    }
}

/// Map tracing levels to our levels
pub fn map_level(level: tracing::Level) -> Level {
    match level {
        tracing::Level::ERROR => Level::Error,
        tracing::Level::WARN => Level::Warn,
        tracing::Level::INFO => Level::Info,
        tracing::Level::DEBUG => Level::Debug,
        tracing::Level::TRACE => Level::Trace,
    }
}

/// Visitor to extract the message from tracing fields
#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl MessageVisitor {
    /// The message goes in front of any fields already recorded
    fn set_message(&mut self, message: &str) {
        if self.message.is_empty() {
            self.message.push_str(message);
        } else {
            self.message = format!("{message} {}", self.message);
        }
    }

    fn push_field(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Display) {
        if !self.message.is_empty() {
            self.message.push(' ');
        }
        let _ = write!(self.message, "{}={}", field.name(), value);
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.set_message(value);
        } else {
            self.push_field(field, &value);
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.set_message(&format!("{value:?}"));
        } else {
            if !self.message.is_empty() {
                self.message.push(' ');
            }
            let _ = write!(self.message, "{}={:?}", field.name(), value);
        }
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.push_field(field, &value);
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.push_field(field, &value);
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.push_field(field, &value);
    }
}

/// Install a global tracing subscriber that forwards events to the global logger
///
/// # Example
/// ```no_run
/// use logiface::{ConsoleLogger, compat::tracing_bridge::init_tracing_bridge, set_logger};
/// use std::sync::Arc;
///
/// set_logger(Some(Arc::new(ConsoleLogger::new())));
/// init_tracing_bridge().expect("Failed to set tracing bridge");
/// ```
pub fn init_tracing_bridge() -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry().with(TracingBridge::new()).try_init()
}
