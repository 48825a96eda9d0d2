//! crates/logging/src/macros.rs
//! Call-site macros that capture variadic arguments for [`write`](crate::write).

/// Compile-time ceiling applied by the per-severity macros.
///
/// Calls more verbose than this never reach [`write`](crate::write), mirroring
/// upstream's `LOG_LOCAL_LEVEL`.
pub const LOG_LOCAL_LEVEL: crate::Severity = crate::Severity::Verbose;

/// Captures the arguments of a log call and forwards them to [`write`](crate::write).
///
/// Each argument is converted with [`Arg::from`](crate::Arg), so integers,
/// characters, string slices, floats and raw pointers can be passed directly.
///
/// # Example
/// ```ignore
/// log_write!(Severity::Info, "app", "%c (%d) %s: boot %d", 1200_u32, "app", 3);
/// ```
#[macro_export]
macro_rules! log_write {
    ($severity:expr, $tag:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::write($severity, $tag, $format, &[$($crate::Arg::from($arg)),*])
    };
}

/// Like [`log_write!`] but skipped when the severity exceeds [`LOG_LOCAL_LEVEL`].
#[macro_export]
macro_rules! log_level_local {
    ($severity:expr, $tag:expr, $($rest:tt)+) => {{
        let severity: $crate::Severity = $severity;
        if severity.permits($crate::LOG_LOCAL_LEVEL) {
            $crate::log_write!(severity, $tag, $($rest)+)
        } else {
            $crate::Outcome::Suppressed($crate::SuppressReason::BelowThreshold)
        }
    }};
}

/// Logs at [`Severity::Error`](crate::Severity::Error).
///
/// # Example
/// ```ignore
/// loge!("nvs", "open failed: %d", err);
/// ```
#[macro_export]
macro_rules! loge {
    ($tag:expr, $($rest:tt)+) => {
        $crate::log_level_local!($crate::Severity::Error, $tag, $($rest)+)
    };
}

/// Logs at [`Severity::Warn`](crate::Severity::Warn).
#[macro_export]
macro_rules! logw {
    ($tag:expr, $($rest:tt)+) => {
        $crate::log_level_local!($crate::Severity::Warn, $tag, $($rest)+)
    };
}

/// Logs at [`Severity::Info`](crate::Severity::Info).
#[macro_export]
macro_rules! logi {
    ($tag:expr, $($rest:tt)+) => {
        $crate::log_level_local!($crate::Severity::Info, $tag, $($rest)+)
    };
}

/// Logs at [`Severity::Debug`](crate::Severity::Debug).
#[macro_export]
macro_rules! logd {
    ($tag:expr, $($rest:tt)+) => {
        $crate::log_level_local!($crate::Severity::Debug, $tag, $($rest)+)
    };
}

/// Logs at [`Severity::Verbose`](crate::Severity::Verbose).
#[macro_export]
macro_rules! logv {
    ($tag:expr, $($rest:tt)+) => {
        $crate::log_level_local!($crate::Severity::Verbose, $tag, $($rest)+)
    };
}
