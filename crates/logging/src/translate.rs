//! crates/logging/src/translate.rs
//! Severity to sink priority translation.
//!
//! The mapping is a fixed lookup table indexed by severity rank. Its entries
//! follow the `rank + 2` relationship of this call contract, which places
//! `Error` on `LOG_ERR` and `Verbose` on `LOG_DEBUG`. Only the table is
//! consulted; there is no separate offset mode.

use logging_sink::SyslogPriority;

use crate::levels::Severity;

/// Sink priority for each severity, indexed by [`Severity::as_u8`].
pub const PRIORITY_TABLE: [SyslogPriority; 6] = [
    SyslogPriority::Critical, // None
    SyslogPriority::Error,    // Error
    SyslogPriority::Warning,  // Warn
    SyslogPriority::Notice,   // Info
    SyslogPriority::Info,     // Debug
    SyslogPriority::Debug,    // Verbose
];

/// Translates an upstream severity into the sink's priority scale.
///
/// ```
/// use logging::{Severity, translate};
/// use logging_sink::SyslogPriority;
///
/// assert_eq!(translate(Severity::Error), SyslogPriority::Error);
/// assert_eq!(translate(Severity::Verbose), SyslogPriority::Debug);
/// ```
#[must_use]
pub const fn translate(severity: Severity) -> SyslogPriority {
    PRIORITY_TABLE[severity.as_u8() as usize]
}
