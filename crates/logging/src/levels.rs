//! crates/logging/src/levels.rs
//! Severity ranks used by upstream log call sites.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Upstream log severity, ordered from most restrictive to most verbose.
///
/// The numeric ranks match the upstream enumeration (`NONE = 0` through
/// `VERBOSE = 5`). A record at severity `s` passes a threshold `t` when
/// `s <= t`, i.e. when it is at least as important as the threshold.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Severity {
    /// No output.
    None = 0,
    /// Critical errors the component cannot recover from on its own.
    Error = 1,
    /// Error conditions from which recovery has been attempted.
    Warn = 2,
    /// Normal flow of events.
    #[default]
    Info = 3,
    /// Extra information not needed for normal use.
    Debug = 4,
    /// Large or frequent debugging output.
    Verbose = 5,
}

impl Severity {
    /// Every rank from most restrictive to most verbose.
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Verbose,
    ];

    /// Converts an upstream numeric rank into a severity.
    #[must_use]
    pub const fn from_u8(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Self::None),
            1 => Some(Self::Error),
            2 => Some(Self::Warn),
            3 => Some(Self::Info),
            4 => Some(Self::Debug),
            5 => Some(Self::Verbose),
            _ => None,
        }
    }

    /// Returns the upstream numeric rank.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns the single-letter marker upstream prints for this severity.
    ///
    /// [`Severity::None`] never produces output and has no letter.
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Error => Some('E'),
            Self::Warn => Some('W'),
            Self::Info => Some('I'),
            Self::Debug => Some('D'),
            Self::Verbose => Some('V'),
        }
    }

    /// Maps a severity letter back to its rank.
    #[must_use]
    pub const fn from_letter(letter: u8) -> Option<Self> {
        match letter {
            b'E' => Some(Self::Error),
            b'W' => Some(Self::Warn),
            b'I' => Some(Self::Info),
            b'D' => Some(Self::Debug),
            b'V' => Some(Self::Verbose),
            _ => None,
        }
    }

    /// Returns the lowercase name of the severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Verbose => "verbose",
        }
    }

    /// Reports whether a record at this severity passes `threshold`.
    ///
    /// ```
    /// use logging::Severity;
    ///
    /// assert!(Severity::Error.permits(Severity::Info));
    /// assert!(Severity::Info.permits(Severity::Info));
    /// assert!(!Severity::Debug.permits(Severity::Info));
    /// ```
    #[must_use]
    pub const fn permits(self, threshold: Self) -> bool {
        self.as_u8() <= threshold.as_u8()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a severity name or rank cannot be parsed.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown log severity: {input:?} (expected none, error, warn, info, debug, verbose or 0-5)")]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed.to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "error" | "e" => Some(Self::Error),
            "warn" | "warning" | "w" => Some(Self::Warn),
            "info" | "i" => Some(Self::Info),
            "debug" | "d" => Some(Self::Debug),
            "verbose" | "v" => Some(Self::Verbose),
            other => other.parse::<u8>().ok().and_then(Self::from_u8),
        };

        parsed.ok_or_else(|| ParseSeverityError {
            input: s.to_owned(),
        })
    }
}

impl TryFrom<u8> for Severity {
    type Error = ParseSeverityError;

    fn try_from(rank: u8) -> Result<Self, ParseSeverityError> {
        Self::from_u8(rank).ok_or_else(|| ParseSeverityError {
            input: rank.to_string(),
        })
    }
}
