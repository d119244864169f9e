#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logr` is a leveled logging facade. Code logs through the [`Logger`] and
//! [`InfoLogger`] contracts; [`LeveledLogger`] implements them by routing each
//! call to a sink chosen by severity and verbosity. Descendants derived with
//! [`LeveledLogger::v`] speak at a given level and stay silent above the
//! configured ceiling. Descendants derived with [`LeveledLogger::with_prefix`]
//! tag every line.
//!
//! This crate re-exports the core (`logging`) and the concrete sinks
//! (`logging-sink`), and hosts the process-wide default logger in [`global`].
//!
//! # Examples
//!
//! ```
//! use logr::{BufferSink, LoggerConfig};
//! use std::sync::Arc;
//!
//! let buffer = Arc::new(BufferSink::new());
//! let logger = LoggerConfig::from_verbose_count(1)
//!     .with_prefix("sync: ")
//!     .build([buffer.clone() as Arc<dyn logr::Sink>])?;
//!
//! logger.info("starting")?;
//! logger.v(1).info("scanning")?;
//! logger.v(2).info("per-file detail")?;
//! logr::log_error!(logger, "{} files failed", 3)?;
//!
//! assert_eq!(
//!     buffer.contents(),
//!     "INFO sync: starting\nV[1] sync: scanning\nERROR sync: 3 files failed\n"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialisation of [`LoggerConfig`].
//! - `tracing`: `TracingSink` and the `LoggerLayer` bridge.

pub mod global;

pub use logging::*;
pub use logging_sink::*;
