//! crates/logging-sink/src/tracing_sink.rs
//! Sink forwarding records to the active `tracing` subscriber.

use std::io;

use logging::{Record, Sink};

/// Sink that turns each record into a `tracing` event.
///
/// | record                 | event               |
/// |------------------------|---------------------|
/// | error                  | `ERROR`             |
/// | info at level 0        | `INFO`              |
/// | info at level `n > 0`  | `DEBUG` with `verbosity = n` |
///
/// Every event carries the call site as a `caller` field and, when the
/// logger has one, its prefix as a `prefix` field. Rendering never fails.
///
/// Do not combine this sink with `logging::LoggerLayer` on the same
/// subscriber: each would feed the other.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates the sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn prefix_field<'a>(record: &Record<'a>) -> Option<&'a str> {
    Some(record.prefix()).filter(|prefix| !prefix.is_empty())
}

impl Sink for TracingSink {
    fn info(&self, record: &Record<'_>) -> io::Result<()> {
        let caller = record.location();
        let prefix = prefix_field(record);
        if record.level() == 0 {
            tracing::info!(caller = %caller, prefix, "{}", record.message());
        } else {
            tracing::debug!(
                caller = %caller,
                prefix,
                verbosity = record.level(),
                "{}",
                record.message()
            );
        }
        Ok(())
    }

    fn error(&self, record: &Record<'_>) -> io::Result<()> {
        tracing::error!(
            caller = %record.location(),
            prefix = prefix_field(record),
            "{}",
            record.message()
        );
        Ok(())
    }
}
