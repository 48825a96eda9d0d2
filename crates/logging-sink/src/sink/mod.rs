//! crates/logging-sink/src/sink/mod.rs
//! The downstream sink contract.

#[cfg(any(test, feature = "test-support"))]
mod recording;
#[cfg(feature = "tracing")]
mod tracing_sink;

#[cfg(any(test, feature = "test-support"))]
pub use recording::{OwnedArg, RecordingSink, SinkCall};
#[cfg(feature = "tracing")]
pub use tracing_sink::{TRACING_TARGET, TracingSink};

use crate::args::ArgCursor;
use crate::syslog::SyslogPriority;

/// Destination for adapted log calls.
///
/// A sink receives the translated priority, the message identifier (the
/// upstream tag), the format string with any metadata prefix removed, and the
/// remaining arguments positioned so the first slot lines up with the first
/// specifier of `format`. The returned integer is the sink's own status code
/// and is passed back to the caller untouched.
///
/// Implementations may be called from any thread and must not call back into
/// the redirect layer.
///
/// Closures with the matching signature are sinks too:
///
/// ```
/// use logging_sink::{ArgCursor, Sink, SyslogPriority};
///
/// let sink = |priority: SyslogPriority, ident: &str, format: &str, args: ArgCursor<'_>| {
///     assert_eq!(ident, "app");
///     assert_eq!(format, "ready");
///     assert!(args.is_empty());
///     priority.as_raw()
/// };
///
/// assert_eq!(sink.emit(SyslogPriority::Notice, "app", "ready", ArgCursor::empty()), 5);
/// ```
pub trait Sink {
    /// Emits one adapted call and returns the sink's status.
    fn emit(&self, priority: SyslogPriority, ident: &str, format: &str, args: ArgCursor<'_>)
    -> i32;
}

impl<F> Sink for F
where
    F: Fn(SyslogPriority, &str, &str, ArgCursor<'_>) -> i32,
{
    fn emit(
        &self,
        priority: SyslogPriority,
        ident: &str,
        format: &str,
        args: ArgCursor<'_>,
    ) -> i32 {
        self(priority, ident, format, args)
    }
}

/// Sink that drops every call and reports success.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DiscardSink;

impl Sink for DiscardSink {
    fn emit(&self, _: SyslogPriority, _: &str, _: &str, _: ArgCursor<'_>) -> i32 {
        0
    }
}
