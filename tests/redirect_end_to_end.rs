//! End-to-end test through the facade crate.
//!
//! Installs a recording sink once and replays the output of a short wifi
//! connection sequence, checking what the sink observes.

use esp_log_redirect::{
    Severity, SuppressReason, SyslogPriority, install_sink, logd, logi, logw, set_level,
};
use logging_sink::{OwnedArg, RecordingSink};

static SINK: RecordingSink = RecordingSink::new();

/// Verifies only payload lines survive a mixed sequence of calls.
#[test]
fn wifi_connection_sequence() {
    install_sink(&SINK).expect("sink installs once per process");
    set_level("*", Severity::Info);

    // Header, payload and trailer the wifi driver emits per record.
    logi!("wifi", "%c (%d) %s:", 4_210_u32, "wifi");
    logi!("wifi", "connected to %s", "home-ap");
    logi!("wifi", "%s", "\r\n");

    // Regular component output with an embedded coloured prefix.
    logw!("dhcp", "\x1b[0;33mW (%u) %s: lease in %d s", 4_300_u32, "dhcp", 30);

    // Below threshold.
    let outcome = logd!("dhcp", "renew timer armed");
    assert_eq!(outcome.suppress_reason(), Some(SuppressReason::BelowThreshold));

    let calls = SINK.take();
    assert_eq!(calls.len(), 2);

    assert_eq!(calls[0].ident, "wifi");
    assert_eq!(calls[0].priority, SyslogPriority::Notice);
    assert_eq!(calls[0].format, "connected to %s");
    assert_eq!(calls[0].args, vec![OwnedArg::Str("home-ap".to_owned())]);

    assert_eq!(calls[1].ident, "dhcp");
    assert_eq!(calls[1].priority, SyslogPriority::Warning);
    assert_eq!(calls[1].format, "lease in %d s");
    assert_eq!(calls[1].args, vec![OwnedArg::Int(30)]);
}
