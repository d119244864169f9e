//! crates/logging-sink/src/writer.rs
//! Stream sink with optional call-site tagging.

use std::ffi::OsStr;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use logging::{Record, Sink};

use crate::line_mode::LineMode;

/// Sink that renders records onto a byte stream.
///
/// A rendered record is the prefix, an optional `file:line: ` call-site tag,
/// the message and a terminator chosen by the sink's [`LineMode`]. Errors and
/// informational records render identically; the logger separates them by
/// routing to different sinks.
///
/// Each record is assembled first and then written with a single
/// `write_all` followed by `flush` while the writer lock is held.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logging::LeveledLogger;
/// use logging_sink::WriterSink;
///
/// let sink = Arc::new(WriterSink::new(Vec::new()));
/// let logger = LeveledLogger::with_sink(0, Arc::clone(&sink));
/// logger.with_prefix("worker: ").info("ready")?;
///
/// sink.with_writer(|out| assert_eq!(out.as_slice(), b"worker: ready\n"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct WriterSink<W> {
    writer: Mutex<W>,
    line_mode: LineMode,
    location: bool,
}

impl<W> WriterSink<W> {
    /// Creates a sink that appends a newline to each record and omits the call site.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink using an explicit [`LineMode`].
    #[must_use]
    pub const fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            writer: Mutex::new(writer),
            line_mode,
            location: false,
        }
    }

    /// Enables or disables the `file:line: ` tag before each message.
    #[must_use]
    pub fn with_location(mut self, enabled: bool) -> Self {
        self.location = enabled;
        self
    }

    /// Returns the configured [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Reports whether records carry their call site.
    #[must_use]
    pub const fn location(&self) -> bool {
        self.location
    }

    /// Runs `f` with exclusive access to the underlying writer.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.lock())
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WriterSink<io::Stderr> {
    /// Creates a sink writing to the process's standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl WriterSink<io::Stdout> {
    /// Creates a sink writing to the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> WriterSink<W> {
    fn render(&self, record: &Record<'_>) -> io::Result<()> {
        let message = record.message();
        let mut line = Vec::with_capacity(record.prefix().len() + message.len() + 24);
        line.extend_from_slice(record.prefix().as_bytes());
        if self.location {
            let location = record.location();
            let file = Path::new(location.file())
                .file_name()
                .and_then(OsStr::to_str)
                .unwrap_or(location.file());
            write!(line, "{file}:{}: ", location.line())?;
        }
        line.extend_from_slice(message.as_bytes());
        line.extend_from_slice(self.line_mode.terminator(message).as_bytes());

        let mut writer = self.lock();
        writer.write_all(&line)?;
        writer.flush()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn info(&self, record: &Record<'_>) -> io::Result<()> {
        self.render(record)
    }

    fn error(&self, record: &Record<'_>) -> io::Result<()> {
        self.render(record)
    }
}

impl<W> fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink")
            .field("line_mode", &self.line_mode)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}
