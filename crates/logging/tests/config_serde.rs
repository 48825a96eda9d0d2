//! Serialization tests for configuration types (requires the `serde` feature).

use logging::{AdapterConfig, Severity};

/// Verifies severities serialize as lowercase names.
#[test]
fn severity_serializes_lowercase() {
    let json = serde_json::to_string(&Severity::Verbose).expect("serialize");
    assert_eq!(json, "\"verbose\"");
    let parsed: Severity = serde_json::from_str("\"warn\"").expect("deserialize");
    assert_eq!(parsed, Severity::Warn);
}

/// Verifies the adapter configuration survives a JSON round-trip.
#[test]
fn adapter_config_round_trips() {
    let config = AdapterConfig::new()
        .with_default_level(Severity::Debug)
        .with_gate(false);
    let json = serde_json::to_string(&config).expect("serialize");
    let parsed: AdapterConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, config);
}

/// Verifies missing fields fall back to defaults.
#[test]
fn partial_config_uses_defaults() {
    let parsed: AdapterConfig =
        serde_json::from_str(r#"{"default_level":"error"}"#).expect("deserialize");
    assert_eq!(parsed.default_level, Severity::Error);
    assert!(parsed.gate);
    assert!(parsed.suppress_artifacts);
}
