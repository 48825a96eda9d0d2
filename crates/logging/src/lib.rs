#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` sits between ESP-IDF style log call sites and a syslog-like
//! sink. Call sites hand over a severity, a tag, a printf-style format and its
//! arguments; the sink expects a syslog priority, a message identifier and a
//! format whose arguments line up with its specifiers. This crate reconciles
//! the two without changing either side.
//!
//! # Design
//!
//! Two pieces take part in every call:
//!
//! - [`LevelStore`] holds the single threshold that gates calls. A process-wide
//!   instance backs [`set_level`] and [`get_level`]; embedders may create their
//!   own.
//! - [`FormatAdapter`] runs the pipeline: gate on the threshold, remove the
//!   metadata prefix upstream embeds in the format (and the two leading
//!   arguments that feed it), drop known artifact lines, translate the severity
//!   through [`PRIORITY_TABLE`], and forward to the [`Sink`].
//!
//! Arguments travel as an [`ArgCursor`]; discarding the prefix arguments
//! advances the cursor, so alignment between specifiers and arguments is
//! explicit.
//!
//! # Invariants
//!
//! - A call more verbose than the threshold never reaches the sink and its
//!   arguments are never inspected.
//! - Without a recognised prefix the format is forwarded byte-identical and no
//!   argument is consumed.
//! - The pipeline neither allocates nor locks, so it can run from restricted
//!   execution contexts.
//!
//! # Errors
//!
//! Adaptation itself cannot fail; every call ends in an [`Outcome`]. Parsing a
//! [`Severity`] from text returns [`ParseSeverityError`] and installing a
//! second process-wide sink returns [`SinkAlreadyInstalled`].
//!
//! # Examples
//!
//! ```
//! use logging::{Arg, ArgCursor, FormatAdapter, LevelStore, Severity, SuppressReason};
//! use logging_sink::SyslogPriority;
//!
//! let levels = LevelStore::new(Severity::Verbose);
//! let sink = |_: SyslogPriority, _: &str, _: &str, _: ArgCursor<'_>| 0;
//! let adapter = FormatAdapter::new(&levels, &sink);
//!
//! // The wifi driver's trailing "%s" call is dropped.
//! let slots = [Arg::Str("\r\n")];
//! let outcome = adapter.adapt(Severity::Info, "wifi", "%s", ArgCursor::new(&slots));
//! assert_eq!(outcome.suppress_reason(), Some(SuppressReason::KnownArtifact));
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Severity`] and [`AdapterConfig`].
//! - `tracing`: trace events for suppression decisions under the
//!   `esplog::adapter` target, and the `TracingSink` re-export.

mod adapter;
mod artifact;
mod config;
mod level_store;
mod levels;
mod macros;
mod prefix;
mod translate;
mod writer;

pub use adapter::{FormatAdapter, Outcome, SuppressReason};
pub use artifact::{KNOWN_ARTIFACTS, KnownArtifact, WIFI_ARTIFACTS, is_known_artifact};
pub use config::AdapterConfig;
pub use level_store::{DEFAULT_LEVEL, LevelStore, get_level, global_levels, set_level};
pub use levels::{ParseSeverityError, Severity};
pub use macros::LOG_LOCAL_LEVEL;
pub use prefix::{
    PLACEHOLDER_MARKER, PREFIX_ARGUMENTS, PrefixShape, StrippedFormat, strip_metadata_prefix,
};
pub use translate::{PRIORITY_TABLE, translate};
pub use writer::{SinkAlreadyInstalled, install_sink, sink_installed, write, writev};

pub use logging_sink::{Arg, ArgCursor, Sink, SyslogPriority};
#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub use logging_sink::TracingSink;
