#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Redirects ESP-IDF style log calls into a syslog-like message sink.
//!
//! This crate re-exports the two workspace crates that do the work:
//!
//! - [`logging`] owns the threshold, the format adapter and the process-wide
//!   [`write`]/[`writev`] entry points.
//! - [`logging_sink`] defines the [`Sink`] contract, the argument cursor and
//!   the syslog priority set.
//!
//! # Examples
//!
//! ```
//! use esp_log_redirect::{ArgCursor, Severity, SyslogPriority, install_sink, logi, set_level};
//!
//! fn print(priority: SyslogPriority, ident: &str, format: &str, args: ArgCursor<'_>) -> i32 {
//!     println!("<{priority}> {ident}: {format} ({} args)", args.len());
//!     0
//! }
//!
//! static SINK: fn(SyslogPriority, &str, &str, ArgCursor<'_>) -> i32 = print;
//!
//! install_sink(&SINK).expect("first installation");
//! set_level("*", Severity::Debug);
//! logi!("app", "%c (%d) %s: started %d", "app", 10_u32, 1);
//! ```

pub use logging::*;
pub use logging_sink;
