//! Integration tests for the sink call contract.
//!
//! These tests exercise the public surface the format adapter relies on:
//! cursor alignment after discarding leading arguments, raw priority values,
//! and the recording sink used by downstream test suites.

use logging_sink::{Arg, ArgCursor, DiscardSink, OwnedArg, RecordingSink, Sink, SyslogPriority};

// ============================================================================
// Cursor Alignment Tests
// ============================================================================

/// Verifies the forwarded cursor starts at the first payload argument.
#[test]
fn skipped_cursor_forwards_payload_only() {
    let sink = RecordingSink::new();
    let slots = [Arg::Str("wifi"), Arg::Uint(31337), Arg::Int(42), Arg::Str("ok")];

    sink.emit(
        SyslogPriority::Notice,
        "wifi",
        "value %d %s",
        ArgCursor::new(&slots).skip(2),
    );

    let calls = sink.take();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].args,
        vec![OwnedArg::Int(42), OwnedArg::Str("ok".to_owned())]
    );
}

/// Verifies reading one argument from the forwarded cursor yields the payload.
#[test]
fn first_read_after_skip_is_payload() {
    let slots = [Arg::Str("tag"), Arg::Uint(5), Arg::Int(42)];
    let mut cursor = ArgCursor::new(&slots).skip(2);
    assert_eq!(cursor.next().and_then(Arg::as_int), Some(42));
}

/// Verifies a cursor over fewer slots than skipped stays in bounds.
#[test]
fn over_skipping_leaves_empty_cursor() {
    let slots = [Arg::Str("tag")];
    let cursor = ArgCursor::new(&slots).skip(2);
    assert!(cursor.is_empty());
    assert_eq!(cursor.count(), 0);
}

// ============================================================================
// Priority Scale Tests
// ============================================================================

/// Verifies every priority survives a raw round-trip through the sink scale.
#[test]
fn raw_priorities_are_contiguous() {
    for (expected, priority) in SyslogPriority::ALL.iter().enumerate() {
        assert_eq!(priority.as_raw(), expected as i32);
    }
}

// ============================================================================
// Sink Implementations
// ============================================================================

/// Verifies the recording sink keeps identifier and format verbatim.
#[test]
fn recording_sink_keeps_identifier_and_format() {
    let sink = RecordingSink::with_status(12);
    let status = sink.emit(SyslogPriority::Error, "nvs", "init failed", ArgCursor::empty());

    assert_eq!(status, 12);
    let calls = sink.calls();
    assert_eq!(calls[0].ident, "nvs");
    assert_eq!(calls[0].format, "init failed");
    assert_eq!(calls[0].priority, SyslogPriority::Error);
    assert!(calls[0].args.is_empty());
}

/// Verifies sinks can be shared across threads behind a static reference.
#[test]
fn recording_sink_is_shareable_across_threads() {
    static SINK: std::sync::OnceLock<RecordingSink> = std::sync::OnceLock::new();
    let sink = SINK.get_or_init(RecordingSink::new);

    let handles: Vec<_> = (0..4)
        .map(|n| {
            std::thread::spawn(move || {
                let slots = [Arg::Int(n)];
                sink.emit(SyslogPriority::Info, "worker", "%d", ArgCursor::new(&slots));
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("thread completes");
    }

    assert_eq!(sink.len(), 4);
}

/// Verifies the discard sink reports success for any call.
#[test]
fn discard_sink_accepts_everything() {
    for priority in SyslogPriority::ALL {
        assert_eq!(DiscardSink.emit(priority, "", "", ArgCursor::empty()), 0);
    }
}
