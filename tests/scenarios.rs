//! End-to-end scenarios combining the logger, the adapters and the sinks.

use std::io::Write;
use std::sync::Arc;
use std::thread;

use logr::{
    BufferSink, ImmediateWriter, LeveledLogger, LineBufferedWriter, LineMode, Logger, LoggerConfig,
    Sink, WriterSink, log_info,
};
use proptest::prelude::*;

// ============================================================================
// Rendering through a buffer
// ============================================================================

/// Verifies the rendering table for a ceiling of 1.
#[test]
fn ceiling_one_renders_expected_lines() {
    let (buffer, logger) = BufferSink::leveled(1);
    logger.info("m").unwrap();
    logger.v(1).info("m").unwrap();
    logger.v(2).info("m").unwrap();
    logger.error("m").unwrap();
    assert_eq!(buffer.contents(), "INFO m\nV[1] m\nERROR m\n");
}

/// Verifies the prefix is fused without a separator.
#[test]
fn prefix_fuses_without_separator() {
    let (buffer, logger) = BufferSink::leveled(0);
    logger.with_prefix("tag").info("hello").unwrap();
    assert_eq!(buffer.contents(), "INFO taghello\n");
}

/// Verifies a single buffer serves every slot when padding a ceiling of 2.
#[test]
fn single_buffer_padded_to_ceiling_two() {
    let buffer = Arc::new(BufferSink::new());
    let logger = LeveledLogger::new(2, [buffer.clone() as Arc<dyn Sink>]).unwrap();
    assert_eq!(logger.slots(), 4);

    logger.error("e").unwrap();
    logger.info("i").unwrap();
    logger.v(1).info("one").unwrap();
    logger.v(2).info("two").unwrap();
    assert_eq!(buffer.contents(), "ERROR e\nINFO i\nV[1] one\nV[2] two\n");
}

/// Verifies errors and info can be split across sinks.
#[test]
fn errors_and_info_split_across_sinks() {
    let errors = Arc::new(BufferSink::new());
    let info = Arc::new(BufferSink::new());
    let logger =
        LeveledLogger::new(1, [errors.clone() as Arc<dyn Sink>, info.clone()]).unwrap();

    logger.v(1).error("bad").unwrap();
    logger.v(1).info("fine").unwrap();

    assert_eq!(errors.contents(), "ERROR bad\n");
    assert_eq!(info.contents(), "V[1] fine\n");
}

// ============================================================================
// Writer sink and configuration
// ============================================================================

/// Verifies configuration from a verbose count produces a working logger.
#[test]
fn config_builds_prefixed_logger() {
    let sink = Arc::new(WriterSink::with_line_mode(Vec::new(), LineMode::WithNewline));
    let logger = LoggerConfig::from_verbose_count(2)
        .with_prefix("sync: ")
        .build([sink.clone() as Arc<dyn Sink>])
        .unwrap();

    logger.v(2).info("deep").unwrap();
    logger.v(3).info("deeper").unwrap();
    sink.with_writer(|out| assert_eq!(out.as_slice(), b"sync: deep\n"));
}

/// Verifies a nested prefix replaces the inherited one.
#[test]
fn nested_prefix_replaces_parent() {
    let (buffer, logger) = BufferSink::leveled(0);
    let child = logger.with_prefix("outer: ").with_prefix("inner: ");
    child.info("x").unwrap();
    assert_eq!(buffer.contents(), "INFO inner: x\n");
}

// ============================================================================
// Adapters over concrete sinks
// ============================================================================

/// Verifies child process output piped through a buffered writer keeps lines.
#[test]
fn buffered_writer_streams_into_buffer_sink() {
    let (buffer, logger) = BufferSink::leveled(1);
    {
        let mut writer = LineBufferedWriter::info(logger.v(1).with_prefix("child: "));
        writer.write_all(b"abc").unwrap();
        writer.write_all(b"def\nsecond\nthi").unwrap();
        writer.write_all(b"rd").unwrap();
    }
    assert_eq!(
        buffer.contents(),
        "V[1] child: abcdef\nV[1] child: second\nV[1] child: third\n"
    );
}

/// Verifies an immediate writer forwards each chunk as its own record.
#[test]
fn immediate_writer_into_buffer_sink() {
    let (buffer, logger) = BufferSink::leveled(0);
    let mut writer = ImmediateWriter::error(logger);
    writer.write_all(b"partial").unwrap();
    writer.write_all(b" rest\n").unwrap();
    assert_eq!(buffer.contents(), "ERROR partial\nERROR  rest\n");
}

// ============================================================================
// Trait objects
// ============================================================================

fn report(logger: &dyn Logger) {
    log_info!(logger.v(1), "detail {}", 1).unwrap();
    logger.error("failure").unwrap();
}

/// Verifies code written against the contract works with any logger.
#[test]
fn generic_code_uses_contract() {
    let (buffer, logger) = BufferSink::leveled(1);
    report(&logger);
    report(&logger.with_prefix("p "));
    assert_eq!(
        buffer.contents(),
        "V[1] detail 1\nERROR failure\nV[1] p detail 1\nERROR p failure\n"
    );
}

// ============================================================================
// Concurrency
// ============================================================================

/// Verifies shared descendants log from many threads without tearing lines.
#[test]
fn concurrent_descendants_keep_lines_whole() {
    let (buffer, logger) = BufferSink::leveled(2);
    let handles: Vec<_> = (0..4)
        .map(|id| {
            let logger = logger.with_prefix(&format!("[{id}] "));
            thread::spawn(move || {
                let verbose = logger.v(2);
                for n in 0..100 {
                    verbose.info_fmt(format_args!("tick {n}")).unwrap();
                    if n % 10 == 0 {
                        logger.error_fmt(format_args!("tock {n}")).unwrap();
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let contents = buffer.contents();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 4 * 110);
    assert_eq!(lines.iter().filter(|l| l.starts_with("V[2] [")).count(), 400);
    assert_eq!(lines.iter().filter(|l| l.starts_with("ERROR [")).count(), 40);
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    #[test]
    fn prefixed_render_is_prefix_then_render(prefix in "[a-z :]{0,8}", message in "[a-z ]{0,16}") {
        let plain = Arc::new(WriterSink::new(Vec::new()));
        let logger = LeveledLogger::with_sink(0, plain.clone());
        logger.info(&message).unwrap();

        let prefixed = Arc::new(WriterSink::new(Vec::new()));
        let logger = LeveledLogger::with_sink(0, prefixed.clone());
        logger.with_prefix(&prefix).info(&message).unwrap();

        let plain = plain.with_writer(|out| out.clone());
        let prefixed = prefixed.with_writer(|out| out.clone());
        prop_assert_eq!(prefixed, [prefix.as_bytes(), plain.as_slice()].concat());
    }

    #[test]
    fn disabled_levels_leave_buffer_empty(verbosity in 0usize..4, extra in 1usize..8) {
        let (buffer, logger) = BufferSink::leveled(verbosity);
        let child = logger.v(verbosity + extra);
        prop_assert!(!child.enabled());
        child.info("never").unwrap();
        prop_assert!(buffer.is_empty());
    }
}
