//! crates/logging/src/adapter.rs
//! The per-call adaptation pipeline.
//!
//! Every call runs the same straight sequence: threshold gate, metadata
//! prefix removal, known-artifact check, severity translation, dispatch. Each
//! step may end the call early; none of them allocates, locks or retries.

use std::fmt;

use logging_sink::{ArgCursor, Sink, SyslogPriority};

use crate::artifact::is_known_artifact;
use crate::config::AdapterConfig;
use crate::level_store::LevelStore;
use crate::levels::Severity;
use crate::prefix::strip_metadata_prefix;
use crate::translate::translate;

/// Why a call did not reach the sink.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SuppressReason {
    /// The severity is more verbose than the current threshold.
    BelowThreshold,
    /// Nothing was left of the format once the metadata prefix was removed.
    EmptyAfterStrip,
    /// The call matched a known artifact of its producer.
    KnownArtifact,
    /// No sink has been installed for the process-wide entry points.
    NoSink,
}

impl SuppressReason {
    /// Returns a short identifier for the reason.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BelowThreshold => "below-threshold",
            Self::EmptyAfterStrip => "empty-after-strip",
            Self::KnownArtifact => "known-artifact",
            Self::NoSink => "no-sink",
        }
    }
}

impl fmt::Display for SuppressReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one adaptation call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The call reached the sink.
    Forwarded {
        /// Priority passed to the sink.
        priority: SyslogPriority,
        /// Status returned by the sink.
        status: i32,
    },
    /// The call was dropped before reaching the sink.
    Suppressed(SuppressReason),
}

impl Outcome {
    /// Reports whether the call was dropped.
    #[must_use]
    pub const fn is_suppressed(&self) -> bool {
        matches!(self, Self::Suppressed(_))
    }

    /// Returns the sink status of a forwarded call.
    #[must_use]
    pub const fn status(&self) -> Option<i32> {
        match self {
            Self::Forwarded { status, .. } => Some(*status),
            Self::Suppressed(_) => None,
        }
    }

    /// Returns the reason a call was dropped.
    #[must_use]
    pub const fn suppress_reason(&self) -> Option<SuppressReason> {
        match self {
            Self::Forwarded { .. } => None,
            Self::Suppressed(reason) => Some(*reason),
        }
    }
}

/// Reconciles upstream log calls with a sink.
///
/// The adapter borrows its [`LevelStore`] and sink, so several adapters can
/// share one threshold and one adapter can be rebuilt cheaply per call.
///
/// # Examples
///
/// ```
/// use logging::{Arg, ArgCursor, FormatAdapter, LevelStore, Severity};
/// use logging_sink::SyslogPriority;
///
/// let levels = LevelStore::new(Severity::Info);
/// let sink = |priority: SyslogPriority, ident: &str, format: &str, mut args: ArgCursor<'_>| {
///     assert_eq!(priority, SyslogPriority::Notice);
///     assert_eq!(ident, "app");
///     assert_eq!(format, "hello %d");
///     assert_eq!(args.next(), Some(Arg::Int(42)));
///     0
/// };
/// let adapter = FormatAdapter::new(&levels, &sink);
///
/// let slots = [Arg::Str("app"), Arg::Uint(1234), Arg::Int(42)];
/// let outcome = adapter.adapt(
///     Severity::Info,
///     "app",
///     "%c (%d) %s: hello %d",
///     ArgCursor::new(&slots),
/// );
/// assert!(!outcome.is_suppressed());
///
/// let outcome = adapter.adapt(Severity::Debug, "app", "noise", ArgCursor::empty());
/// assert!(outcome.is_suppressed());
/// ```
#[derive(Debug)]
pub struct FormatAdapter<'a, S: ?Sized> {
    levels: &'a LevelStore,
    sink: &'a S,
    config: AdapterConfig,
}

impl<S: ?Sized> Clone for FormatAdapter<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for FormatAdapter<'_, S> {}

impl<'a, S> FormatAdapter<'a, S>
where
    S: Sink + ?Sized,
{
    /// Creates an adapter with the default [`AdapterConfig`].
    #[must_use]
    pub const fn new(levels: &'a LevelStore, sink: &'a S) -> Self {
        Self::with_config(levels, sink, AdapterConfig::new())
    }

    /// Creates an adapter with an explicit configuration.
    ///
    /// [`AdapterConfig::default_level`] is not applied here; it only seeds
    /// stores built through [`AdapterConfig::level_store`].
    #[must_use]
    pub const fn with_config(levels: &'a LevelStore, sink: &'a S, config: AdapterConfig) -> Self {
        Self {
            levels,
            sink,
            config,
        }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> AdapterConfig {
        self.config
    }

    /// Returns the level store consulted by the gate.
    #[must_use]
    pub const fn levels(&self) -> &'a LevelStore {
        self.levels
    }

    /// Adapts one call and forwards it to the sink unless it is suppressed.
    ///
    /// `args` must list the arguments in the order the original `format`
    /// consumes them, including the two that belong to a metadata prefix.
    pub fn adapt(
        &self,
        severity: Severity,
        tag: &str,
        format: &str,
        args: ArgCursor<'_>,
    ) -> Outcome {
        if self.config.gate && !self.levels.is_enabled(severity) {
            return suppressed(SuppressReason::BelowThreshold, severity, tag);
        }

        let stripped = strip_metadata_prefix(format);
        if stripped.has_prefix() && stripped.format().is_empty() {
            return suppressed(SuppressReason::EmptyAfterStrip, severity, tag);
        }

        if self.config.suppress_artifacts && is_known_artifact(tag, stripped.format()) {
            return suppressed(SuppressReason::KnownArtifact, severity, tag);
        }

        let priority = translate(severity);
        let status = self
            .sink
            .emit(priority, tag, stripped.format(), stripped.align(args));
        Outcome::Forwarded { priority, status }
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn suppressed(reason: SuppressReason, severity: Severity, tag: &str) -> Outcome {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        target: "esplog::adapter",
        tag,
        %severity,
        reason = reason.as_str(),
        "log call suppressed"
    );
    Outcome::Suppressed(reason)
}
