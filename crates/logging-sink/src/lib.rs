#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the concrete backends behind a
//! [`logging::LeveledLogger`]. Each type implements [`logging::Sink`] and can
//! be shared by every descendant of a root logger.
//!
//! # Design
//!
//! - [`BufferSink`] renders records into an in-memory buffer, tagging each
//!   line with its severity. It is meant for tests and for capturing output
//!   that is inspected later.
//! - [`WriterSink`] renders records onto any [`std::io::Write`] implementor,
//!   optionally tagging them with the call site. Whether a record ends with a
//!   newline is controlled by [`LineMode`].
//! - `TracingSink` (feature `tracing`) forwards records to the active
//!   `tracing` subscriber.
//!
//! # Invariants
//!
//! - A sink renders one whole record (prefix, message and terminator) under a
//!   single lock acquisition.
//! - Exclusive access to a sink's target is only available through closures
//!   ([`BufferSink::with_buffer`], [`WriterSink::with_writer`]), so the lock
//!   is always released.
//! - A poisoned lock is recovered rather than propagated as a panic.
//!
//! # Errors
//!
//! Rendering surfaces [`std::io::Error`] values from the underlying writer
//! unchanged. [`BufferSink`] never fails.
//!
//! # Examples
//!
//! Route errors to one sink and informational output to another:
//!
//! ```
//! use std::sync::Arc;
//! use logging::{LeveledLogger, Sink};
//! use logging_sink::{BufferSink, LineMode, WriterSink};
//!
//! let errors = Arc::new(BufferSink::new());
//! let info = Arc::new(WriterSink::with_line_mode(Vec::new(), LineMode::WithNewline));
//! let sinks: [Arc<dyn Sink>; 2] = [errors.clone(), info.clone()];
//! let logger = LeveledLogger::new(1, sinks)?;
//!
//! logger.error("disk full")?;
//! logger.v(1).info("retrying")?;
//!
//! assert_eq!(errors.contents(), "ERROR disk full\n");
//! info.with_writer(|out| assert_eq!(out.as_slice(), b"retrying\n"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # See also
//!
//! - `logging` for the logger, the writer adapters and configuration.

mod buffer;
mod line_mode;
mod writer;

#[cfg(feature = "tracing")]
mod tracing_sink;

pub use buffer::BufferSink;
pub use line_mode::LineMode;
pub use writer::WriterSink;

#[cfg(feature = "tracing")]
pub use tracing_sink::TracingSink;
