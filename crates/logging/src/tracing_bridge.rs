//! crates/logging/src/tracing_bridge.rs
//! Bridge routing `tracing` events into a [`LeveledLogger`].
//!
//! [`LoggerLayer`] is a tracing-subscriber layer that renders each event's
//! fields into one message and hands it to a leveled logger. `ERROR` and
//! `WARN` events go through the error entry point; `INFO`, `DEBUG` and `TRACE`
//! map to verbosity levels 0, 1 and 2 and are gated by the logger's ceiling.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{LoggerConfig, init_tracing};
//!
//! let logger = LoggerConfig::from_verbose_count(1).build(sinks)?;
//! init_tracing(logger);
//!
//! tracing::info!("listening");
//! tracing::debug!(port = 873, "bound socket");
//! tracing::trace!("dropped: above the ceiling");
//! ```

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::leveled::LeveledLogger;

/// A tracing layer forwarding events to a [`LeveledLogger`].
#[derive(Clone, Debug)]
pub struct LoggerLayer {
    logger: LeveledLogger,
}

impl LoggerLayer {
    /// Creates a layer writing to `logger`.
    #[must_use]
    pub const fn new(logger: LeveledLogger) -> Self {
        Self { logger }
    }

    /// The logger receiving events.
    #[must_use]
    pub const fn logger(&self) -> &LeveledLogger {
        &self.logger
    }

    /// Maps a tracing level to an info verbosity; `None` selects the error entry point.
    const fn level_to_verbosity(level: &Level) -> Option<usize> {
        match *level {
            Level::ERROR | Level::WARN => None,
            Level::INFO => Some(0),
            Level::DEBUG => Some(1),
            Level::TRACE => Some(2),
        }
    }
}

impl<S> Layer<S> for LoggerLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let verbosity = Self::level_to_verbosity(event.metadata().level());
        let child = verbosity.map(|level| self.logger.v(level));
        if child.as_ref().is_some_and(|c| !c.enabled()) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let message = visitor.finish();

        // A layer has no caller to hand a sink failure back to.
        let _ = match child {
            Some(child) => child.info(&message),
            None => self.logger.error(&message),
        };
    }
}

/// Visitor collecting the `message` field followed by the remaining fields.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{name}={value}");
    }

    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.message);
        } else {
            self.push_field(field.name(), format_args!("{value}"));
        }
    }
}

/// Installs a [`LoggerLayer`] over `logger` as the global default subscriber.
///
/// # Panics
///
/// Panics if a global default subscriber has already been set.
pub fn init_tracing(logger: LeveledLogger) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::new(logger))
        .init();
}

/// Installs a [`LoggerLayer`] behind an additional filter layer.
///
/// # Example
///
/// ```rust,ignore
/// use logging::init_tracing_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// init_tracing_with_filter(logger, EnvFilter::from_default_env());
/// ```
pub fn init_tracing_with_filter<F>(logger: LeveledLogger, filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(LoggerLayer::new(logger))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{Record, Sink};
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt;

    #[derive(Default)]
    struct Collect(Mutex<Vec<String>>);

    impl Sink for Collect {
        fn info(&self, record: &Record<'_>) -> io::Result<()> {
            let line = format!("V{} {}", record.level(), record.message());
            self.0.lock().unwrap().push(line);
            Ok(())
        }

        fn error(&self, record: &Record<'_>) -> io::Result<()> {
            let line = format!("E {}", record.message());
            self.0.lock().unwrap().push(line);
            Ok(())
        }
    }

    fn capture(verbosity: usize, f: impl FnOnce()) -> Vec<String> {
        let sink = Arc::new(Collect::default());
        let logger = LeveledLogger::with_sink(verbosity, Arc::clone(&sink));
        let subscriber = tracing_subscriber::registry().with(LoggerLayer::new(logger));
        tracing::subscriber::with_default(subscriber, f);
        let lines = sink.0.lock().unwrap().clone();
        lines
    }

    #[test]
    fn level_to_verbosity_mapping() {
        assert_eq!(LoggerLayer::level_to_verbosity(&Level::ERROR), None);
        assert_eq!(LoggerLayer::level_to_verbosity(&Level::WARN), None);
        assert_eq!(LoggerLayer::level_to_verbosity(&Level::INFO), Some(0));
        assert_eq!(LoggerLayer::level_to_verbosity(&Level::DEBUG), Some(1));
        assert_eq!(LoggerLayer::level_to_verbosity(&Level::TRACE), Some(2));
    }

    #[test]
    fn events_route_by_level() {
        let lines = capture(1, || {
            tracing::error!("failed");
            tracing::warn!("careful");
            tracing::info!("started");
            tracing::debug!("details");
            tracing::trace!("too verbose");
        });
        assert_eq!(lines, ["E failed", "E careful", "V0 started", "V1 details"]);
    }

    #[test]
    fn fields_follow_message() {
        let lines = capture(0, || {
            tracing::info!(port = 873, host = "example", "bound");
            tracing::info!(count = 2);
        });
        assert_eq!(lines, ["V0 bound port=873 host=example", "V0 count=2"]);
    }
}
