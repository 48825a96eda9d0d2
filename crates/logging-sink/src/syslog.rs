// Syslog priority scale understood by the downstream sink.
//
// The sink takes a plain integer priority. Values are the POSIX syslog(3)
// severities, so a sink that ends in `vsyslog` can pass them through
// untouched. They are spelled out numerically rather than through libc so the
// contract holds on targets without a C syslog; the unix test suite
// cross-checks them against `<syslog.h>`.

use std::fmt;

/// Syslog priority levels matching POSIX syslog(3) severity constants.
///
/// Lower values are more severe. The redirect layer never produces
/// [`Emergency`](Self::Emergency) or [`Alert`](Self::Alert); they exist so the
/// full sink scale can be represented and parsed back from raw integers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(i32)]
pub enum SyslogPriority {
    /// System is unusable (LOG_EMERG).
    Emergency = 0,
    /// Action must be taken immediately (LOG_ALERT).
    Alert = 1,
    /// Critical conditions (LOG_CRIT).
    Critical = 2,
    /// Error conditions (LOG_ERR).
    Error = 3,
    /// Warning conditions (LOG_WARNING).
    Warning = 4,
    /// Normal but significant condition (LOG_NOTICE).
    Notice = 5,
    /// Informational messages (LOG_INFO).
    Info = 6,
    /// Debug-level messages (LOG_DEBUG).
    Debug = 7,
}

impl SyslogPriority {
    /// Every priority from most to least severe.
    pub const ALL: [Self; 8] = [
        Self::Emergency,
        Self::Alert,
        Self::Critical,
        Self::Error,
        Self::Warning,
        Self::Notice,
        Self::Info,
        Self::Debug,
    ];

    /// Returns the raw integer passed to the sink.
    #[must_use]
    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    /// Converts a raw syslog severity back into a priority.
    ///
    /// Facility bits are not accepted; only `0..=7` map to a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::SyslogPriority;
    ///
    /// assert_eq!(SyslogPriority::from_raw(3), Some(SyslogPriority::Error));
    /// assert_eq!(SyslogPriority::from_raw(8), None);
    /// ```
    #[must_use]
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Emergency),
            1 => Some(Self::Alert),
            2 => Some(Self::Critical),
            3 => Some(Self::Error),
            4 => Some(Self::Warning),
            5 => Some(Self::Notice),
            6 => Some(Self::Info),
            7 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Returns the conventional lowercase keyword for the priority.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emergency => "emerg",
            Self::Alert => "alert",
            Self::Critical => "crit",
            Self::Error => "err",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

impl fmt::Display for SyslogPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SyslogPriority> for i32 {
    fn from(priority: SyslogPriority) -> Self {
        priority.as_raw()
    }
}
