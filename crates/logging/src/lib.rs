#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is the core of a leveled logging facade. Callers emit
//! informational output at graduated verbosity, plus errors, through the
//! [`InfoLogger`] and [`Logger`] contracts. [`LeveledLogger`] implements both
//! by routing each call to one of several [`Sink`]s chosen by verbosity.
//!
//! # Design
//!
//! - [`LeveledLogger`] holds an ordered sink list, a current level, a
//!   verbosity ceiling, a prefix and a call depth. [`LeveledLogger::v`] and
//!   [`LeveledLogger::with_prefix`] derive cheap descendants that alias the
//!   same sink list.
//! - [`LineBufferedWriter`] and [`ImmediateWriter`] implement
//!   [`std::io::Write`] on top of a logger entry point so byte-oriented
//!   producers can log through the facade.
//! - [`LoggerConfig`] builds a root logger from a verbosity setting, which
//!   can come from repeated `-v` flags or the `LOGR_VERBOSITY` variable.
//! - With the `tracing` feature, `LoggerLayer` forwards `tracing` events into
//!   a leveled logger.
//!
//! # Invariants
//!
//! - Slot 0 serves errors, slot `level + 1` serves info at `level`; a root
//!   logger has `verbosity + 2` slots and pads missing sinks with the last one.
//! - Informational output is emitted only when `level <= verbosity`. Errors
//!   are never gated.
//! - The prefix is fused to the message without any separator.
//!
//! # Errors
//!
//! Construction fails with [`Error::NoSinks`] when no sink is supplied.
//! Rendering failures are [`std::io::Error`] values returned unchanged from the
//! sink.
//!
//! # Examples
//!
//! Capture lines written through a buffered writer:
//!
//! ```
//! use std::io::{self, Write};
//! use std::sync::{Arc, Mutex};
//! use logging::{LeveledLogger, LineBufferedWriter, Record, Sink};
//!
//! #[derive(Default)]
//! struct Lines(Mutex<Vec<String>>);
//!
//! impl Sink for Lines {
//!     fn info(&self, record: &Record<'_>) -> io::Result<()> {
//!         self.0.lock().unwrap().push(format!("{}{}", record.prefix(), record.message()));
//!         Ok(())
//!     }
//!     fn error(&self, record: &Record<'_>) -> io::Result<()> {
//!         self.info(record)
//!     }
//! }
//!
//! let lines = Arc::new(Lines::default());
//! let logger = LeveledLogger::with_sink(0, lines.clone()).with_prefix("child: ");
//!
//! let mut writer = LineBufferedWriter::info(logger);
//! writer.write_all(b"spawned\nexit")?;
//! writer.close()?;
//!
//! assert_eq!(*lines.0.lock().unwrap(), ["child: spawned", "child: exit"]);
//! # Ok::<(), io::Error>(())
//! ```
//!
//! # See also
//!
//! - `logging-sink` for the in-memory, stream and tracing sinks.

mod adapter;
mod config;
mod error;
mod leveled;
mod macros;
mod sink;
mod traits;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use adapter::{ImmediateWriter, LineBufferedWriter, LoggerEmit};
pub use config::{LoggerConfig, VERBOSITY_ENV, parse_verbosity};
pub use error::{Error, Result};
pub use leveled::{DEFAULT_CALL_DEPTH, ERROR_SLOT, LeveledLogger, info_slot};
pub use sink::{Record, Sink};
pub use traits::{InfoLogger, Logger};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{LoggerLayer, init_tracing, init_tracing_with_filter};
