//! src/global.rs
//! Process-wide default logger.
//!
//! Until [`set_logger`] is called, the functions in this module write to
//! standard error through a [`LeveledLogger`] with verbosity 0, tagging each
//! line with its call site. The default is built on first use.
//!
//! # Initialisation order
//!
//! Install the process logger once during startup, before any other thread
//! logs. Replacing it later is allowed: callers that already hold the value
//! returned by [`logger`] keep writing to the previous logger, while every
//! later call through this module uses the new one.
//!
//! ```
//! use logr::{BufferSink, global};
//!
//! let (buffer, logger) = BufferSink::leveled(1);
//! global::set_logger(logger);
//!
//! global::v(1).info("cache warmed")?;
//! global::error("cache miss")?;
//! assert_eq!(buffer.contents(), "V[1] cache warmed\nERROR cache miss\n");
//! # Ok::<(), std::io::Error>(())
//! ```

use std::fmt;
use std::io;
use std::process;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use logging::{InfoLogger, LeveledLogger, Logger};
use logging_sink::WriterSink;

static LOGGER: LazyLock<RwLock<Arc<dyn Logger>>> =
    LazyLock::new(|| RwLock::new(Arc::new(default_logger())));

fn default_logger() -> LeveledLogger {
    LeveledLogger::with_sink(0, WriterSink::stderr().with_location(true))
}

/// Replaces the process-wide logger.
pub fn set_logger<L>(logger: L)
where
    L: Logger + 'static,
{
    let logger: Arc<dyn Logger> = Arc::new(logger);
    *LOGGER.write().unwrap_or_else(PoisonError::into_inner) = logger;
}

/// Returns the current process-wide logger.
#[must_use]
pub fn logger() -> Arc<dyn Logger> {
    Arc::clone(&LOGGER.read().unwrap_or_else(PoisonError::into_inner))
}

/// Emits `message` at verbosity 0.
#[track_caller]
pub fn info(message: &str) -> io::Result<()> {
    logger().info(message)
}

/// Formats `args` and emits the result at verbosity 0.
#[track_caller]
pub fn info_fmt(args: fmt::Arguments<'_>) -> io::Result<()> {
    logger().info_fmt(args)
}

/// Alias of [`info`].
#[track_caller]
pub fn print(message: &str) -> io::Result<()> {
    info(message)
}

/// Alias of [`info_fmt`]. The sink terminates the line.
#[track_caller]
pub fn println(args: fmt::Arguments<'_>) -> io::Result<()> {
    info_fmt(args)
}

/// Emits `message` at error severity.
#[track_caller]
pub fn error(message: &str) -> io::Result<()> {
    logger().error(message)
}

/// Formats `args` and emits the result at error severity.
#[track_caller]
pub fn error_fmt(args: fmt::Arguments<'_>) -> io::Result<()> {
    logger().error_fmt(args)
}

/// Returns a descendant of the current logger speaking at `level`.
#[must_use]
pub fn v(level: usize) -> Box<dyn InfoLogger> {
    logger().v(level)
}

/// Returns a descendant of the current logger prefixing its output.
#[must_use]
pub fn with_prefix(prefix: &str) -> Box<dyn Logger> {
    logger().with_prefix(prefix)
}

/// Logs `message` as an error and exits the process with status 1.
#[track_caller]
pub fn fatal(message: &str) -> ! {
    let _ = error(message);
    process::exit(1)
}

/// Formats `args`, logs the result as an error and exits with status 1.
#[track_caller]
pub fn fatal_fmt(args: fmt::Arguments<'_>) -> ! {
    let _ = error_fmt(args);
    process::exit(1)
}

/// Logs `message` as an error and panics with it.
#[track_caller]
pub fn panic(message: &str) -> ! {
    let _ = error(message);
    std::panic::panic_any(message.to_owned())
}

/// Formats `args`, logs the result as an error and panics with it.
#[track_caller]
pub fn panic_fmt(args: fmt::Arguments<'_>) -> ! {
    panic(&fmt::format(args))
}
