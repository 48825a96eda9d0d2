#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` defines the downstream half of the log redirect layer: the
//! shape of a syslog-like sink call and the types that travel with it. A sink
//! receives a numeric [`SyslogPriority`], a message identifier, a printf-style
//! format string and an [`ArgCursor`] over the arguments that belong to that
//! format.
//!
//! # Design
//!
//! Variadic argument lists are modelled as a borrowed slice of typed
//! [`Arg`] slots plus a read position. Dropping leading arguments advances the
//! cursor; forwarding passes the cursor on by value. Nothing here allocates,
//! so the contract can be honoured from restricted execution contexts.
//!
//! Two ready-made sinks ship with the crate:
//!
//! - `RecordingSink` (feature `test-support`) captures every call for
//!   assertions.
//! - `TracingSink` (feature `tracing`) reports calls as structured `tracing`
//!   events without rendering the format string.
//!
//! # Invariants
//!
//! - [`SyslogPriority`] values equal the POSIX `LOG_*` severities.
//! - [`ArgCursor::skip`] never moves past the end of the slot slice.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{Arg, ArgCursor, Sink, SyslogPriority};
//!
//! let sink = |priority: SyslogPriority, ident: &str, format: &str, mut args: ArgCursor<'_>| {
//!     assert_eq!((ident, format), ("app", "count %d"));
//!     assert_eq!(args.next(), Some(Arg::Int(3)));
//!     priority.as_raw()
//! };
//!
//! let slots = [Arg::Int(3)];
//! let status = sink.emit(SyslogPriority::Info, "app", "count %d", ArgCursor::new(&slots));
//! assert_eq!(status, 6);
//! ```
//!
//! # See also
//!
//! - `logging` crate for the level store and the format adapter that feeds sinks.

mod args;
mod sink;
mod syslog;

pub use args::{Arg, ArgCursor};
pub use sink::{DiscardSink, Sink};
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub use sink::{OwnedArg, RecordingSink, SinkCall};
#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub use sink::{TRACING_TARGET, TracingSink};
pub use syslog::SyslogPriority;
