//! crates/logging/src/sink.rs
//! Sink contract consumed by [`LeveledLogger`](crate::LeveledLogger).

use std::io;
use std::panic::Location;

/// A single rendering request handed to a [`Sink`].
///
/// The logger fills every field before dispatch; sinks decide which of them
/// end up in the output. The prefix travels with the record instead of being
/// set on the sink beforehand, so a sink shared by many descendants never
/// observes a prefix belonging to a different call.
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    level: usize,
    prefix: &'a str,
    message: &'a str,
    call_depth: usize,
    location: &'static Location<'static>,
}

impl<'a> Record<'a> {
    /// Creates a record.
    #[must_use]
    pub const fn new(
        level: usize,
        prefix: &'a str,
        message: &'a str,
        call_depth: usize,
        location: &'static Location<'static>,
    ) -> Self {
        Self {
            level,
            prefix,
            message,
            call_depth,
            location,
        }
    }

    /// Verbosity of the logger that produced the record. Always 0 for errors.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    /// Literal text to fuse before the message.
    #[must_use]
    pub const fn prefix(&self) -> &'a str {
        self.prefix
    }

    /// The fully formatted message.
    #[must_use]
    pub const fn message(&self) -> &'a str {
        self.message
    }

    /// Number of facade frames between the original caller and the sink.
    #[must_use]
    pub const fn call_depth(&self) -> usize {
        self.call_depth
    }

    /// Source location of the original call.
    #[must_use]
    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

/// A backend capable of rendering formatted messages.
///
/// Implementations are shared between every descendant of a root logger and
/// may be called from several threads at once. A sink that buffers output
/// must serialise one whole render (prefix, message and newline) under a
/// single lock acquisition.
pub trait Sink: Send + Sync {
    /// Renders an informational record.
    fn info(&self, record: &Record<'_>) -> io::Result<()>;

    /// Renders an error record.
    fn error(&self, record: &Record<'_>) -> io::Result<()>;
}

impl<S: Sink + ?Sized> Sink for std::sync::Arc<S> {
    fn info(&self, record: &Record<'_>) -> io::Result<()> {
        (**self).info(record)
    }

    fn error(&self, record: &Record<'_>) -> io::Result<()> {
        (**self).error(record)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn info(&self, record: &Record<'_>) -> io::Result<()> {
        (**self).info(record)
    }

    fn error(&self, record: &Record<'_>) -> io::Result<()> {
        (**self).error(record)
    }
}
