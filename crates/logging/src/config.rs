//! crates/logging/src/config.rs
//! Adapter configuration.

use crate::level_store::{DEFAULT_LEVEL, LevelStore};
use crate::levels::Severity;

/// Behaviour switches for a [`FormatAdapter`](crate::FormatAdapter).
///
/// The process-wide entry points use [`AdapterConfig::default`]. Embedders
/// that build their own adapter can disable the threshold gate (to reproduce
/// upstream builds that never consulted it) or the artifact filter.
///
/// [`default_level`](Self::default_level) only seeds stores built by
/// [`level_store`](Self::level_store). The process-wide store always starts at
/// [`DEFAULT_LEVEL`] and is changed through [`set_level`](crate::set_level).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AdapterConfig {
    /// Threshold a store built by [`level_store`](Self::level_store) starts with.
    pub default_level: Severity,
    /// Suppress calls that are more verbose than the current threshold.
    pub gate: bool,
    /// Suppress the known artifact lines of specific producers.
    pub suppress_artifacts: bool,
}

impl AdapterConfig {
    /// Creates the default configuration: [`DEFAULT_LEVEL`], gate and artifact filter on.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_level: DEFAULT_LEVEL,
            gate: true,
            suppress_artifacts: true,
        }
    }

    /// Returns a copy with a different default threshold.
    #[must_use]
    pub const fn with_default_level(mut self, level: Severity) -> Self {
        self.default_level = level;
        self
    }

    /// Returns a copy with the threshold gate switched on or off.
    #[must_use]
    pub const fn with_gate(mut self, gate: bool) -> Self {
        self.gate = gate;
        self
    }

    /// Returns a copy with artifact suppression switched on or off.
    #[must_use]
    pub const fn with_artifact_suppression(mut self, enabled: bool) -> Self {
        self.suppress_artifacts = enabled;
        self
    }

    /// Builds a level store seeded with [`default_level`](Self::default_level).
    #[must_use]
    pub const fn level_store(&self) -> LevelStore {
        LevelStore::new(self.default_level)
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self::new()
    }
}
