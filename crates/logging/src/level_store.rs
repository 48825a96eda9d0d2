//! crates/logging/src/level_store.rs
//! Threshold storage shared by every adaptation call.
//!
//! Upstream exposes a per-tag `set_level` API but only one global threshold is
//! kept; the tag argument is accepted and ignored. The threshold is a single
//! atomic byte, so reads from interrupt-like contexts never block and a
//! concurrent writer at worst makes one gating decision slightly stale.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::levels::Severity;

/// Compiled-in threshold used until [`set_level`] is called.
pub const DEFAULT_LEVEL: Severity = Severity::Info;

/// Holds the minimum severity that will be forwarded to the sink.
///
/// # Examples
///
/// ```
/// use logging::{LevelStore, Severity};
///
/// let store = LevelStore::new(Severity::Warn);
/// assert!(store.is_enabled(Severity::Error));
/// assert!(!store.is_enabled(Severity::Info));
///
/// store.set_level("any-tag", Severity::Verbose);
/// assert_eq!(store.level(), Severity::Verbose);
/// ```
#[derive(Debug)]
pub struct LevelStore {
    threshold: AtomicU8,
}

impl LevelStore {
    /// Creates a store seeded with `default`.
    #[must_use]
    pub const fn new(default: Severity) -> Self {
        Self {
            threshold: AtomicU8::new(default as u8),
        }
    }

    /// Sets the threshold. The tag is accepted for interface compatibility only.
    pub fn set_level(&self, _tag: &str, severity: Severity) {
        self.threshold.store(severity.as_u8(), Ordering::Relaxed);
    }

    /// Returns the current threshold.
    #[must_use]
    pub fn level(&self) -> Severity {
        // Only `set_level` writes, and it always stores a valid rank.
        Severity::from_u8(self.threshold.load(Ordering::Relaxed)).unwrap_or(DEFAULT_LEVEL)
    }

    /// Returns the threshold that applies to `tag`, which is always the global one.
    #[must_use]
    pub fn level_for(&self, _tag: &str) -> Severity {
        self.level()
    }

    /// Reports whether a record at `severity` passes the current threshold.
    #[must_use]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity.permits(self.level())
    }
}

impl Default for LevelStore {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL)
    }
}

static GLOBAL_LEVELS: LevelStore = LevelStore::new(DEFAULT_LEVEL);

/// Returns the process-wide level store used by [`write`](crate::write) and
/// [`writev`](crate::writev).
#[must_use]
pub fn global_levels() -> &'static LevelStore {
    &GLOBAL_LEVELS
}

/// Sets the process-wide threshold.
pub fn set_level(tag: &str, severity: Severity) {
    GLOBAL_LEVELS.set_level(tag, severity);
}

/// Returns the process-wide threshold.
#[must_use]
pub fn get_level(tag: &str) -> Severity {
    GLOBAL_LEVELS.level_for(tag)
}
