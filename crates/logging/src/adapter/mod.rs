//! crates/logging/src/adapter/mod.rs
//! Byte-stream writers that feed a logger.
//!
//! [`LineBufferedWriter`] restores line granularity for producers that write
//! in arbitrary chunks, while [`ImmediateWriter`] forwards every write as-is.
//! Both accept a plain emit closure or bind directly to a logger's info or
//! error entry point.

mod buffered;
mod immediate;

pub use buffered::{LineBufferedWriter, LoggerEmit};
pub use immediate::ImmediateWriter;
