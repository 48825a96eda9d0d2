//! crates/logging/src/writer.rs
//! Process-wide entry points matching the upstream `write`/`writev` contract.

use std::sync::OnceLock;

use logging_sink::{Arg, ArgCursor, Sink};
use thiserror::Error;

use crate::adapter::{FormatAdapter, Outcome, SuppressReason};
use crate::level_store;
use crate::levels::Severity;

static SINK: OnceLock<&'static (dyn Sink + Sync)> = OnceLock::new();

/// Error returned when a process-wide sink has already been installed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("a log sink has already been installed for this process")]
pub struct SinkAlreadyInstalled;

/// Installs the sink used by [`write`] and [`writev`].
///
/// The sink can be installed once per process. Until then every call is
/// suppressed with [`SuppressReason::NoSink`].
pub fn install_sink(sink: &'static (dyn Sink + Sync)) -> Result<(), SinkAlreadyInstalled> {
    SINK.set(sink).map_err(|_| SinkAlreadyInstalled)
}

/// Reports whether a process-wide sink is installed.
#[must_use]
pub fn sink_installed() -> bool {
    SINK.get().is_some()
}

/// Adapts one call against the process-wide threshold and sink.
pub fn writev(severity: Severity, tag: &str, format: &str, args: ArgCursor<'_>) -> Outcome {
    let Some(sink) = SINK.get() else {
        return Outcome::Suppressed(SuppressReason::NoSink);
    };
    FormatAdapter::new(level_store::global_levels(), *sink).adapt(severity, tag, format, args)
}

/// Slice form of [`writev`]; the [`log_write!`](crate::log_write) macro expands to this.
pub fn write(severity: Severity, tag: &str, format: &str, args: &[Arg<'_>]) -> Outcome {
    writev(severity, tag, format, ArgCursor::new(args))
}
