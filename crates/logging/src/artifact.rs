//! crates/logging/src/artifact.rs
//! Known spurious lines emitted by specific upstream producers.
//!
//! The wifi driver writes each record as three separate calls: the metadata
//! prefix, the payload, and a lone line terminator. Once the prefix has been
//! stripped the first and third calls carry nothing worth forwarding, so their
//! residual formats are matched here and the calls dropped.

/// A producer tag together with residual formats that must not reach the sink.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct KnownArtifact {
    /// Tag of the producer that emits the artifact.
    pub tag: &'static str,
    /// Exact residual format strings to suppress for that tag.
    pub formats: &'static [&'static str],
}

impl KnownArtifact {
    /// Reports whether `tag` and `format` both match this artifact exactly.
    #[must_use]
    pub fn matches(&self, tag: &str, format: &str) -> bool {
        self.tag == tag && self.formats.iter().any(|candidate| *candidate == format)
    }
}

/// Residual lines produced by the wifi driver's three-call records.
pub const WIFI_ARTIFACTS: KnownArtifact = KnownArtifact {
    tag: "wifi",
    formats: &["%s", " %s:", "\r\n"],
};

/// Every known artifact checked by the adapter.
pub const KNOWN_ARTIFACTS: &[KnownArtifact] = &[WIFI_ARTIFACTS];

/// Reports whether the call is one of the [`KNOWN_ARTIFACTS`].
///
/// ```
/// use logging::is_known_artifact;
///
/// assert!(is_known_artifact("wifi", "%s"));
/// assert!(!is_known_artifact("wifi", "connected %s"));
/// assert!(!is_known_artifact("nvs", "%s"));
/// ```
#[must_use]
pub fn is_known_artifact(tag: &str, format: &str) -> bool {
    KNOWN_ARTIFACTS
        .iter()
        .any(|artifact| artifact.matches(tag, format))
}
