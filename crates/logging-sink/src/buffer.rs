//! crates/logging-sink/src/buffer.rs
//! In-memory sink tagging each line with its severity.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use logging::{LeveledLogger, Record, Sink};

/// Sink that renders every record into a shared in-memory buffer.
///
/// Each record becomes one line: a severity tag, the prefix, the message and
/// a newline unless the message already ends with one.
///
/// | record                 | tag        |
/// |------------------------|------------|
/// | error                  | `ERROR `   |
/// | info at level 0        | `INFO `    |
/// | info at level `n > 0`  | `V[n] `    |
///
/// A whole line is written under a single lock acquisition, so concurrent
/// callers never interleave inside a line.
///
/// # Examples
///
/// ```
/// use logging_sink::BufferSink;
///
/// let (buffer, logger) = BufferSink::leveled(1);
/// logger.info("m")?;
/// logger.v(1).info("m")?;
/// logger.v(2).info("m")?;
/// logger.error("m")?;
///
/// assert_eq!(buffer.contents(), "INFO m\nV[1] m\nERROR m\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Default)]
pub struct BufferSink {
    buffer: Mutex<Vec<u8>>,
}

impl BufferSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink together with a root logger that routes every slot to it.
    #[must_use]
    pub fn leveled(verbosity: usize) -> (Arc<Self>, LeveledLogger) {
        let sink = Arc::new(Self::new());
        let logger = LeveledLogger::with_sink(verbosity, Arc::clone(&sink));
        (sink, logger)
    }

    /// Runs `f` with exclusive access to the buffer.
    ///
    /// No record can be rendered while `f` runs. The lock is released when
    /// `f` returns or unwinds.
    pub fn with_buffer<R>(&self, f: impl FnOnce(&mut Vec<u8>) -> R) -> R {
        f(&mut self.lock())
    }

    /// Returns a lossy UTF-8 copy of everything rendered so far.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Removes and returns the buffered bytes, leaving the buffer empty.
    #[must_use]
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of buffered bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether nothing has been rendered since creation or the last [`take`](Self::take).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn render(&self, tag: Tag, record: &Record<'_>) -> io::Result<()> {
        let message = record.message();
        let terminator = if message.ends_with('\n') { "" } else { "\n" };
        let mut buffer = self.lock();
        write!(buffer, "{tag}{}{message}{terminator}", record.prefix())
    }
}

impl Sink for BufferSink {
    fn info(&self, record: &Record<'_>) -> io::Result<()> {
        self.render(Tag::Info(record.level()), record)
    }

    fn error(&self, record: &Record<'_>) -> io::Result<()> {
        self.render(Tag::Error, record)
    }
}

impl fmt::Debug for BufferSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferSink")
            .field("len", &self.len())
            .finish()
    }
}

#[derive(Clone, Copy)]
enum Tag {
    Error,
    Info(usize),
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("ERROR "),
            Self::Info(0) => f.write_str("INFO "),
            Self::Info(level) => write!(f, "V[{level}] "),
        }
    }
}
