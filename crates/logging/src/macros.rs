//! crates/logging/src/macros.rs
//! Formatting macros over the logger contracts.

/// Formats the arguments and emits them through a logger's info entry point.
///
/// Accepts anything implementing [`InfoLogger`](crate::InfoLogger), including
/// references and boxed trait objects. Evaluates to `io::Result<()>`.
///
/// # Example
/// ```
/// # use logging::{log_info, LeveledLogger, Record, Sink};
/// # struct Quiet;
/// # impl Sink for Quiet {
/// #     fn info(&self, _: &Record<'_>) -> std::io::Result<()> { Ok(()) }
/// #     fn error(&self, _: &Record<'_>) -> std::io::Result<()> { Ok(()) }
/// # }
/// let logger = LeveledLogger::with_sink(1, Quiet);
/// log_info!(logger.v(1), "copied {} files", 3)?;
/// # Ok::<(), std::io::Error>(())
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::InfoLogger as _;
        ($logger).info_fmt(::std::format_args!($($arg)+))
    }};
}

/// Formats the arguments and emits them through a logger's error entry point.
///
/// # Example
/// ```
/// # use logging::{log_error, LeveledLogger, Record, Sink};
/// # struct Quiet;
/// # impl Sink for Quiet {
/// #     fn info(&self, _: &Record<'_>) -> std::io::Result<()> { Ok(()) }
/// #     fn error(&self, _: &Record<'_>) -> std::io::Result<()> { Ok(()) }
/// # }
/// let logger = LeveledLogger::with_sink(0, Quiet);
/// log_error!(logger, "partial transfer (code {})", 23)?;
/// # Ok::<(), std::io::Error>(())
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::Logger as _;
        ($logger).error_fmt(::std::format_args!($($arg)+))
    }};
}
