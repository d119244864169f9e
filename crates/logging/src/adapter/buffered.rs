//! crates/logging/src/adapter/buffered.rs
//! Line-buffering writer emitting one log call per terminated line.

use std::fmt;
use std::io::{self, Write};

use crate::traits::{InfoLogger, Logger};

/// Writer turning an arbitrarily chunked byte stream into one emit call per line.
///
/// Bytes are accumulated until a `\n` arrives; every complete line is emitted
/// without its terminator. A trailing fragment is carried over to the next
/// write and only emitted on its own by [`close`](Self::close) or when the
/// writer is dropped.
///
/// [`flush`](Write::flush) does not emit the fragment, so a producer that
/// flushes mid-line does not split the line in two.
///
/// A `write` that accepted its bytes always returns `Ok`. If `emit` fails
/// while lines are being drained, the failing line is dropped and the lines
/// after it stay pending. The error is then returned by the next `write`,
/// before that call accepts anything, or by [`close`](Self::close).
///
/// The writer holds per-stream state and requires `&mut self`; share it
/// between threads only behind external synchronisation.
///
/// # Examples
///
/// ```
/// use std::io::Write;
/// use logging::LineBufferedWriter;
///
/// let mut lines = Vec::new();
/// let mut writer = LineBufferedWriter::new(|line: &str| {
///     lines.push(line.to_owned());
///     Ok(())
/// });
///
/// writer.write_all(b"first\nsec")?;
/// writer.write_all(b"ond\nthird")?;
/// writer.close()?;
/// drop(writer);
///
/// assert_eq!(lines, ["first", "second", "third"]);
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct LineBufferedWriter<F>
where
    F: FnMut(&str) -> io::Result<()>,
{
    emit: F,
    pending: Vec<u8>,
    deferred: Option<io::Error>,
}

impl<F> LineBufferedWriter<F>
where
    F: FnMut(&str) -> io::Result<()>,
{
    /// Creates a writer calling `emit` once per line.
    #[must_use]
    pub const fn new(emit: F) -> Self {
        Self {
            emit,
            pending: Vec::new(),
            deferred: None,
        }
    }

    /// Bytes received since the last complete line.
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    /// Emits any lines still pending plus the remaining fragment, and clears them.
    ///
    /// Returns the first emit failure, including one held back from an earlier
    /// `write`. Calling `close` again without intervening writes is a no-op.
    pub fn close(&mut self) -> io::Result<()> {
        let deferred = self.deferred.take();
        self.drain_lines()?;
        if !self.pending.is_empty() {
            let fragment = std::mem::take(&mut self.pending);
            (self.emit)(&String::from_utf8_lossy(&fragment))?;
        }
        deferred.map_or(Ok(()), Err)
    }

    fn drain_lines(&mut self) -> io::Result<()> {
        let mut start = 0;
        let mut result = Ok(());
        while let Some(offset) = memchr::memchr(b'\n', &self.pending[start..]) {
            let end = start + offset;
            let line = String::from_utf8_lossy(&self.pending[start..end]);
            start = end + 1;
            if let Err(err) = (self.emit)(&line) {
                result = Err(err);
                break;
            }
        }
        self.pending.drain(..start);
        result
    }
}

/// Emit function bound to a logger entry point.
pub type LoggerEmit = Box<dyn FnMut(&str) -> io::Result<()> + Send>;

impl LineBufferedWriter<LoggerEmit> {
    /// Creates a writer emitting each line through `logger`'s info entry point.
    ///
    /// `io::Write` gives no access to the producer's call site, so records
    /// carry the location of the adapter's own call into `logger`.
    #[must_use]
    pub fn info<L>(logger: L) -> Self
    where
        L: InfoLogger + 'static,
    {
        Self::new(Box::new(move |line: &str| logger.info(line)))
    }

    /// Creates a writer emitting each line through `logger`'s error entry point.
    ///
    /// `io::Write` gives no access to the producer's call site, so records
    /// carry the location of the adapter's own call into `logger`.
    #[must_use]
    pub fn error<L>(logger: L) -> Self
    where
        L: Logger + 'static,
    {
        Self::new(Box::new(move |line: &str| logger.error(line)))
    }
}

impl<F> Write for LineBufferedWriter<F>
where
    F: FnMut(&str) -> io::Result<()>,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(err) = self.deferred.take() {
            return Err(err);
        }
        self.pending
            .try_reserve(buf.len())
            .map_err(|err| io::Error::new(io::ErrorKind::OutOfMemory, err))?;
        self.pending.extend_from_slice(buf);
        if let Err(err) = self.drain_lines() {
            self.deferred = Some(err);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<F> Drop for LineBufferedWriter<F>
where
    F: FnMut(&str) -> io::Result<()>,
{
    fn drop(&mut self) {
        let _ = self.close();
    }
}

impl<F> fmt::Debug for LineBufferedWriter<F>
where
    F: FnMut(&str) -> io::Result<()>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineBufferedWriter")
            .field("pending", &String::from_utf8_lossy(&self.pending))
            .field("deferred", &self.deferred)
            .finish_non_exhaustive()
    }
}
