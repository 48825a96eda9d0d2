//! crates/logging-sink/src/sink/recording.rs
//! In-memory sink that captures adapted calls for assertions.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::Sink;
use crate::args::{Arg, ArgCursor};
use crate::syslog::SyslogPriority;

/// Owned copy of an [`Arg`] captured by [`RecordingSink`].
#[derive(Clone, Debug, PartialEq)]
pub enum OwnedArg {
    /// Signed integer slot.
    Int(i64),
    /// Unsigned integer slot.
    Uint(u64),
    /// Character slot.
    Char(char),
    /// String slot.
    Str(String),
    /// Pointer slot.
    Ptr(usize),
    /// Floating point slot.
    Float(f64),
}

impl From<Arg<'_>> for OwnedArg {
    fn from(arg: Arg<'_>) -> Self {
        match arg {
            Arg::Int(value) => Self::Int(value),
            Arg::Uint(value) => Self::Uint(value),
            Arg::Char(value) => Self::Char(value),
            Arg::Str(value) => Self::Str(value.to_owned()),
            Arg::Ptr(value) => Self::Ptr(value),
            Arg::Float(value) => Self::Float(value),
        }
    }
}

impl PartialEq<Arg<'_>> for OwnedArg {
    fn eq(&self, other: &Arg<'_>) -> bool {
        *self == Self::from(*other)
    }
}

/// One call observed by a [`RecordingSink`].
#[derive(Clone, Debug, PartialEq)]
pub struct SinkCall {
    /// Translated priority.
    pub priority: SyslogPriority,
    /// Message identifier (the upstream tag).
    pub ident: String,
    /// Format string as forwarded.
    pub format: String,
    /// Arguments remaining at the time of the call.
    pub args: Vec<OwnedArg>,
}

/// Sink that records every call for later inspection.
///
/// Intended for tests: the recording allocates, so it is not suitable for the
/// restricted contexts the adapter itself supports.
///
/// # Examples
///
/// ```ignore
/// use logging_sink::{Arg, ArgCursor, RecordingSink, Sink, SyslogPriority};
///
/// let sink = RecordingSink::new();
/// let slots = [Arg::Int(42)];
/// sink.emit(SyslogPriority::Info, "app", "value %d", ArgCursor::new(&slots));
///
/// let calls = sink.take();
/// assert_eq!(calls.len(), 1);
/// assert_eq!(calls[0].format, "value %d");
/// assert_eq!(calls[0].args[0], Arg::Int(42));
/// ```
#[derive(Debug, Default)]
pub struct RecordingSink {
    calls: Mutex<Vec<SinkCall>>,
    status: i32,
}

impl RecordingSink {
    /// Creates an empty recording sink that returns status `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_status(0)
    }

    /// Creates an empty recording sink that returns `status` from every call.
    #[must_use]
    pub const fn with_status(status: i32) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            status,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<SinkCall>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of the recorded calls.
    #[must_use]
    pub fn calls(&self) -> Vec<SinkCall> {
        self.lock().clone()
    }

    /// Drains the recorded calls, clearing the internal buffer.
    pub fn take(&self) -> Vec<SinkCall> {
        self.lock().drain(..).collect()
    }

    /// Returns the number of recorded calls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether no call has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Sink for RecordingSink {
    fn emit(
        &self,
        priority: SyslogPriority,
        ident: &str,
        format: &str,
        args: ArgCursor<'_>,
    ) -> i32 {
        self.lock().push(SinkCall {
            priority,
            ident: ident.to_owned(),
            format: format.to_owned(),
            args: args.map(OwnedArg::from).collect(),
        });
        self.status
    }
}
