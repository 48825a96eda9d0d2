//! crates/logging-sink/src/sink/tracing_sink.rs
//! Sink that forwards adapted calls as `tracing` events.
//!
//! The format string is not rendered. Each event carries the identifier, the
//! syslog keyword, the format and the remaining argument slots as fields, so
//! any subscriber can decide how to present them.

use tracing::Level;

use super::Sink;
use crate::args::ArgCursor;
use crate::syslog::SyslogPriority;

/// Target used for every event emitted by [`TracingSink`].
pub const TRACING_TARGET: &str = "esplog::sink";

/// Sink that reports each call to the current `tracing` subscriber.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TracingSink;

impl TracingSink {
    /// Returns the tracing level used for events at `priority`.
    #[must_use]
    pub const fn level_for(priority: SyslogPriority) -> Level {
        match priority {
            SyslogPriority::Emergency
            | SyslogPriority::Alert
            | SyslogPriority::Critical
            | SyslogPriority::Error => Level::ERROR,
            SyslogPriority::Warning => Level::WARN,
            SyslogPriority::Notice | SyslogPriority::Info => Level::INFO,
            SyslogPriority::Debug => Level::DEBUG,
        }
    }
}

macro_rules! emit_at {
    ($level:expr, $priority:expr, $ident:expr, $format:expr, $args:expr) => {
        ::tracing::event!(
            target: TRACING_TARGET,
            $level,
            ident = $ident,
            priority = %$priority,
            format = $format,
            args = ?$args,
        )
    };
}

impl Sink for TracingSink {
    fn emit(
        &self,
        priority: SyslogPriority,
        ident: &str,
        format: &str,
        args: ArgCursor<'_>,
    ) -> i32 {
        let remaining = args.remaining();
        let level = Self::level_for(priority);
        if level == Level::ERROR {
            emit_at!(Level::ERROR, priority, ident, format, remaining);
        } else if level == Level::WARN {
            emit_at!(Level::WARN, priority, ident, format, remaining);
        } else if level == Level::INFO {
            emit_at!(Level::INFO, priority, ident, format, remaining);
        } else {
            emit_at!(Level::DEBUG, priority, ident, format, remaining);
        }
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Arg;
    use std::sync::{Arc, Mutex};
    use tracing::Subscriber;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
    use tracing_subscriber::registry::LookupSpan;

    #[derive(Clone, Debug, Default)]
    struct Captured {
        target: String,
        level: Option<Level>,
        ident: Option<String>,
        priority: Option<String>,
        format: Option<String>,
        args: Option<String>,
    }

    #[derive(Clone, Default)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<Captured>>>,
    }

    impl tracing::field::Visit for Captured {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            let rendered = format!("{value:?}");
            match field.name() {
                "priority" => self.priority = Some(rendered),
                "args" => self.args = Some(rendered),
                _ => {}
            }
        }

        fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
            match field.name() {
                "ident" => self.ident = Some(value.to_owned()),
                "format" => self.format = Some(value.to_owned()),
                _ => {}
            }
        }
    }

    impl<S> Layer<S> for CaptureLayer
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut captured = Captured {
                target: event.metadata().target().to_owned(),
                level: Some(*event.metadata().level()),
                ..Captured::default()
            };
            event.record(&mut captured);
            self.events.lock().unwrap().push(captured);
        }
    }

    fn capture(f: impl FnOnce()) -> Vec<Captured> {
        let layer = CaptureLayer::default();
        let events = Arc::clone(&layer.events);
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, f);
        let captured = events.lock().unwrap().clone();
        captured
    }

    #[test]
    fn level_mapping_covers_every_priority() {
        assert_eq!(TracingSink::level_for(SyslogPriority::Emergency), Level::ERROR);
        assert_eq!(TracingSink::level_for(SyslogPriority::Critical), Level::ERROR);
        assert_eq!(TracingSink::level_for(SyslogPriority::Error), Level::ERROR);
        assert_eq!(TracingSink::level_for(SyslogPriority::Warning), Level::WARN);
        assert_eq!(TracingSink::level_for(SyslogPriority::Notice), Level::INFO);
        assert_eq!(TracingSink::level_for(SyslogPriority::Info), Level::INFO);
        assert_eq!(TracingSink::level_for(SyslogPriority::Debug), Level::DEBUG);
    }

    #[test]
    fn emitted_level_follows_level_mapping() {
        for priority in SyslogPriority::ALL {
            let events = capture(|| {
                TracingSink.emit(priority, "app", "x", ArgCursor::empty());
            });
            assert_eq!(events.len(), 1, "{priority:?}");
            assert_eq!(events[0].level, Some(TracingSink::level_for(priority)), "{priority:?}");
        }
    }

    #[test]
    fn emits_structured_event() {
        let slots = [Arg::Str("dup"), Arg::Int(42)];
        let events = capture(|| {
            let status = TracingSink.emit(
                SyslogPriority::Warning,
                "wifi",
                "rssi %d",
                ArgCursor::new(&slots).skip(1),
            );
            assert_eq!(status, 0);
        });

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.target, TRACING_TARGET);
        assert_eq!(event.level, Some(Level::WARN));
        assert_eq!(event.ident.as_deref(), Some("wifi"));
        assert_eq!(event.format.as_deref(), Some("rssi %d"));
        assert_eq!(event.priority.as_deref(), Some("warning"));
        assert_eq!(event.args.as_deref(), Some("[Int(42)]"));
    }
}
