//! crates/logging/src/adapter/immediate.rs
//! Pass-through writer emitting every write as one log call.

use std::fmt;
use std::io::{self, Write};

use super::LoggerEmit;
use crate::traits::{InfoLogger, Logger};

/// Writer forwarding each `write` call verbatim as a single emit call.
///
/// No line splitting happens and nothing is retained between calls, which
/// suits producers that already write exactly one line per call.
pub struct ImmediateWriter<F>
where
    F: FnMut(&str) -> io::Result<()>,
{
    emit: F,
}

impl<F> ImmediateWriter<F>
where
    F: FnMut(&str) -> io::Result<()>,
{
    /// Creates a writer calling `emit` once per write.
    #[must_use]
    pub const fn new(emit: F) -> Self {
        Self { emit }
    }
}

impl ImmediateWriter<LoggerEmit> {
    /// Creates a writer emitting each chunk through `logger`'s info entry point.
    ///
    /// `io::Write` gives no access to the producer's call site, so records
    /// carry the location of the adapter's own call into `logger`.
    #[must_use]
    pub fn info<L>(logger: L) -> Self
    where
        L: InfoLogger + 'static,
    {
        Self::new(Box::new(move |chunk: &str| logger.info(chunk)))
    }

    /// Creates a writer emitting each chunk through `logger`'s error entry point.
    ///
    /// `io::Write` gives no access to the producer's call site, so records
    /// carry the location of the adapter's own call into `logger`.
    #[must_use]
    pub fn error<L>(logger: L) -> Self
    where
        L: Logger + 'static,
    {
        Self::new(Box::new(move |chunk: &str| logger.error(chunk)))
    }
}

impl<F> Write for ImmediateWriter<F>
where
    F: FnMut(&str) -> io::Result<()>,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (self.emit)(&String::from_utf8_lossy(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<F> fmt::Debug for ImmediateWriter<F>
where
    F: FnMut(&str) -> io::Result<()>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImmediateWriter").finish_non_exhaustive()
    }
}
