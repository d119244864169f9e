//! crates/logging/src/traits.rs
//! Object-safe logger contracts.

use std::fmt;
use std::io;

/// The info-only half of the logger contract.
///
/// Returned by [`Logger::v`]: a logger bound to one verbosity level can only
/// emit informational output and report whether that output is enabled.
///
/// The emitting methods are `#[track_caller]`, so a call through a trait
/// object still records the caller's location.
pub trait InfoLogger: Send + Sync {
    /// Emits `message` when [`enabled`](Self::enabled) holds, otherwise does nothing.
    #[track_caller]
    fn info(&self, message: &str) -> io::Result<()>;

    /// Formats `args` and emits the result when enabled.
    ///
    /// Formatting is skipped when the logger is disabled.
    #[track_caller]
    fn info_fmt(&self, args: fmt::Arguments<'_>) -> io::Result<()>;

    /// Reports whether informational output of this logger is emitted.
    fn enabled(&self) -> bool;
}

/// The full logger contract: informational and error output plus derivation.
pub trait Logger: InfoLogger {
    /// Emits `message` at error severity. Never gated by verbosity.
    #[track_caller]
    fn error(&self, message: &str) -> io::Result<()>;

    /// Formats `args` and emits the result at error severity.
    #[track_caller]
    fn error_fmt(&self, args: fmt::Arguments<'_>) -> io::Result<()>;

    /// Returns a descendant that speaks at verbosity `level`.
    fn v(&self, level: usize) -> Box<dyn InfoLogger>;

    /// Returns a descendant whose output is prefixed with `prefix`.
    fn with_prefix(&self, prefix: &str) -> Box<dyn Logger>;
}

impl<L: InfoLogger + ?Sized> InfoLogger for Box<L> {
    #[track_caller]
    fn info(&self, message: &str) -> io::Result<()> {
        (**self).info(message)
    }

    #[track_caller]
    fn info_fmt(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        (**self).info_fmt(args)
    }

    fn enabled(&self) -> bool {
        (**self).enabled()
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    #[track_caller]
    fn error(&self, message: &str) -> io::Result<()> {
        (**self).error(message)
    }

    #[track_caller]
    fn error_fmt(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        (**self).error_fmt(args)
    }

    fn v(&self, level: usize) -> Box<dyn InfoLogger> {
        (**self).v(level)
    }

    fn with_prefix(&self, prefix: &str) -> Box<dyn Logger> {
        (**self).with_prefix(prefix)
    }
}

impl<L: InfoLogger + ?Sized> InfoLogger for std::sync::Arc<L> {
    #[track_caller]
    fn info(&self, message: &str) -> io::Result<()> {
        (**self).info(message)
    }

    #[track_caller]
    fn info_fmt(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        (**self).info_fmt(args)
    }

    fn enabled(&self) -> bool {
        (**self).enabled()
    }
}

impl<L: Logger + ?Sized> Logger for std::sync::Arc<L> {
    #[track_caller]
    fn error(&self, message: &str) -> io::Result<()> {
        (**self).error(message)
    }

    #[track_caller]
    fn error_fmt(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        (**self).error_fmt(args)
    }

    fn v(&self, level: usize) -> Box<dyn InfoLogger> {
        (**self).v(level)
    }

    fn with_prefix(&self, prefix: &str) -> Box<dyn Logger> {
        (**self).with_prefix(prefix)
    }
}
