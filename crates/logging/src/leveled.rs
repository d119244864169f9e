//! crates/logging/src/leveled.rs
//! Verbosity-gated logger multiplexing across an ordered list of sinks.

use std::fmt;
use std::io;
use std::panic::Location;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::sink::{Record, Sink};
use crate::traits::{InfoLogger, Logger};

/// Slot serving every error call.
pub const ERROR_SLOT: usize = 0;

/// Call depth reported by a freshly constructed root logger.
pub const DEFAULT_CALL_DEPTH: usize = 1;

/// Returns the slot serving informational output at `level`.
#[must_use]
pub const fn info_slot(level: usize) -> usize {
    level.saturating_add(1)
}

/// Reference logger routing each call to one of several sinks by verbosity.
///
/// Slot [`ERROR_SLOT`] serves errors and slot `level + 1` serves informational
/// output at `level`. A root logger exposes `verbosity + 2` slots. When fewer
/// sinks are supplied, the last one serves every remaining slot, so a single
/// sink receives errors and all info levels alike. Sinks beyond the last slot
/// are ignored.
///
/// Descendants created through [`v`](Self::v) and
/// [`with_prefix`](Self::with_prefix) are cheap values sharing the same sink
/// list; the list itself is never modified after construction.
///
/// # Examples
///
/// ```
/// use std::io;
/// use std::sync::{Arc, Mutex};
/// use logging::{LeveledLogger, Record, Sink};
///
/// #[derive(Default)]
/// struct Lines(Mutex<Vec<String>>);
///
/// impl Sink for Lines {
///     fn info(&self, record: &Record<'_>) -> io::Result<()> {
///         let line = format!("info{} {}{}", record.level(), record.prefix(), record.message());
///         self.0.lock().unwrap().push(line);
///         Ok(())
///     }
///     fn error(&self, record: &Record<'_>) -> io::Result<()> {
///         let line = format!("error {}{}", record.prefix(), record.message());
///         self.0.lock().unwrap().push(line);
///         Ok(())
///     }
/// }
///
/// let lines = Arc::new(Lines::default());
/// let logger = LeveledLogger::with_sink(1, lines.clone());
///
/// logger.info("ready")?;
/// logger.v(1).info("details")?;
/// logger.v(2).info("dropped")?;
/// logger.with_prefix("db: ").error("gone")?;
///
/// assert_eq!(
///     *lines.0.lock().unwrap(),
///     ["info0 ready", "info1 details", "error db: gone"]
/// );
/// # Ok::<(), io::Error>(())
/// ```
#[derive(Clone)]
pub struct LeveledLogger {
    level: usize,
    verbosity: usize,
    prefix: Arc<str>,
    sinks: Arc<[Arc<dyn Sink>]>,
    call_depth: usize,
}

impl LeveledLogger {
    /// Creates a root logger with the given verbosity ceiling.
    ///
    /// The first sink serves errors, the second level-0 info, the third
    /// level 1 and so on. Returns [`Error::NoSinks`] when `sinks` is empty.
    pub fn new<I>(verbosity: usize, sinks: I) -> Result<Self>
    where
        I: IntoIterator<Item = Arc<dyn Sink>>,
    {
        let slots = info_slot(verbosity).saturating_add(1);
        let sinks: Vec<Arc<dyn Sink>> = sinks.into_iter().take(slots).collect();
        if sinks.is_empty() {
            return Err(Error::NoSinks);
        }

        #[cfg(feature = "tracing")]
        if sinks.len() < slots {
            tracing::trace!(
                supplied = sinks.len(),
                slots,
                "padding logger slots with the last supplied sink"
            );
        }

        Ok(Self {
            level: 0,
            verbosity,
            prefix: Arc::from(""),
            sinks: sinks.into(),
            call_depth: DEFAULT_CALL_DEPTH,
        })
    }

    /// Creates a root logger that routes every slot to `sink`.
    #[must_use]
    pub fn with_sink<S>(verbosity: usize, sink: S) -> Self
    where
        S: Sink + 'static,
    {
        let sink: Arc<dyn Sink> = Arc::new(sink);
        Self {
            level: 0,
            verbosity,
            prefix: Arc::from(""),
            sinks: Arc::from(vec![sink]),
            call_depth: DEFAULT_CALL_DEPTH,
        }
    }

    /// Verbosity this logger speaks at.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    /// Highest level at which informational output is still emitted.
    #[must_use]
    pub const fn verbosity(&self) -> usize {
        self.verbosity
    }

    /// Prefix fused before every message.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Call depth reported to sinks.
    #[must_use]
    pub const fn call_depth(&self) -> usize {
        self.call_depth
    }

    /// Overrides the call depth reported to sinks.
    pub fn set_call_depth(&mut self, depth: usize) {
        self.call_depth = depth;
    }

    /// Number of routing slots, `verbosity + 2`.
    #[must_use]
    pub const fn slots(&self) -> usize {
        info_slot(self.verbosity).saturating_add(1)
    }

    /// Returns the sink serving `slot`, applying the padding policy.
    ///
    /// Out-of-range slots resolve to the last supplied sink as well.
    #[must_use]
    pub fn sink(&self, slot: usize) -> &Arc<dyn Sink> {
        let last = self.sinks.len() - 1;
        &self.sinks[slot.min(last)]
    }

    /// Reports whether informational output is emitted.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.level <= self.verbosity
    }

    /// Emits `message` through the slot for the current level when enabled.
    #[track_caller]
    pub fn info(&self, message: &str) -> io::Result<()> {
        if !self.enabled() {
            return Ok(());
        }
        let record = self.record(self.level, message, Location::caller());
        self.sink(info_slot(self.level)).info(&record)
    }

    /// Formats `args` and emits the result when enabled.
    #[track_caller]
    pub fn info_fmt(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        if !self.enabled() {
            return Ok(());
        }
        let location = Location::caller();
        with_formatted(args, |message| {
            let record = self.record(self.level, message, location);
            self.sink(info_slot(self.level)).info(&record)
        })
    }

    /// Emits `message` through the error slot regardless of verbosity.
    #[track_caller]
    pub fn error(&self, message: &str) -> io::Result<()> {
        let record = self.record(0, message, Location::caller());
        self.sink(ERROR_SLOT).error(&record)
    }

    /// Formats `args` and emits the result through the error slot.
    #[track_caller]
    pub fn error_fmt(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        let location = Location::caller();
        with_formatted(args, |message| {
            let record = self.record(0, message, location);
            self.sink(ERROR_SLOT).error(&record)
        })
    }

    /// Returns a descendant speaking at `level`.
    ///
    /// The level is not checked here; a descendant above the ceiling is
    /// simply disabled.
    #[must_use]
    pub fn v(&self, level: usize) -> Self {
        Self {
            level,
            call_depth: self.call_depth.saturating_add(1),
            ..self.clone()
        }
    }

    /// Returns a descendant whose output starts with `prefix`.
    ///
    /// The prefix replaces any prefix inherited from `self` and is fused to the
    /// message without a separator.
    #[must_use]
    pub fn with_prefix(&self, prefix: &str) -> Self {
        Self {
            prefix: Arc::from(prefix),
            call_depth: self.call_depth.saturating_add(1),
            ..self.clone()
        }
    }

    fn record<'a>(
        &'a self,
        level: usize,
        message: &'a str,
        location: &'static Location<'static>,
    ) -> Record<'a> {
        Record::new(level, &self.prefix, message, self.call_depth, location)
    }
}

fn with_formatted<R>(args: fmt::Arguments<'_>, f: impl FnOnce(&str) -> R) -> R {
    match args.as_str() {
        Some(message) => f(message),
        None => f(&fmt::format(args)),
    }
}

impl fmt::Debug for LeveledLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeveledLogger")
            .field("level", &self.level)
            .field("verbosity", &self.verbosity)
            .field("prefix", &self.prefix)
            .field("sinks", &self.sinks.len())
            .field("call_depth", &self.call_depth)
            .finish()
    }
}

impl InfoLogger for LeveledLogger {
    #[track_caller]
    fn info(&self, message: &str) -> io::Result<()> {
        Self::info(self, message)
    }

    #[track_caller]
    fn info_fmt(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        Self::info_fmt(self, args)
    }

    fn enabled(&self) -> bool {
        Self::enabled(self)
    }
}

impl Logger for LeveledLogger {
    #[track_caller]
    fn error(&self, message: &str) -> io::Result<()> {
        Self::error(self, message)
    }

    #[track_caller]
    fn error_fmt(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        Self::error_fmt(self, args)
    }

    fn v(&self, level: usize) -> Box<dyn InfoLogger> {
        Box::new(Self::v(self, level))
    }

    fn with_prefix(&self, prefix: &str) -> Box<dyn Logger> {
        Box::new(Self::with_prefix(self, prefix))
    }
}
