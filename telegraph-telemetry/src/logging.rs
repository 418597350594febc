//! ## telegraph-telemetry::logging
//! **Structured logging with tracing and OpenTelemetry key/values**
//!
//! The subscriber is installed once by the binary. Library crates only emit
//! `tracing` events and never touch the subscriber.

use opentelemetry::KeyValue;
use tracing::info_span;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    /// Install the global `fmt` subscriber.
    ///
    /// `RUST_LOG` wins over `default_level` when it is set.
    pub fn init(default_level: &str) {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(default_level)),
            )
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::ENTER)
            .init()
    }

    /// Emit a single structured event inside a `telegraph_event` span.
    #[inline]
    pub fn log_event(event_type: &str, metadata: Vec<KeyValue>) {
        let span = info_span!(
            "telegraph_event",
            event_type = event_type,
            otel.kind = "INTERNAL"
        );
        let _entered = span.enter();

        tracing::info!(metadata = ?metadata, "Telegraph event recorded");
    }
}
