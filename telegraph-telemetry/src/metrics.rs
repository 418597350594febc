//! ## telegraph-telemetry::metrics
//! **Prometheus counters for both utilities**
//!
//! The recorder owns its own `Registry`, so several recorders can live in one
//! process (tests create one each).

use prometheus::{IntCounter, Registry};

#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: prometheus::Registry,
    pub chars_encoded: prometheus::IntCounter,
    pub chars_dropped: prometheus::IntCounter,
    pub words_emitted: prometheus::IntCounter,
    pub meetings: prometheus::IntCounter,
    pub transitions: prometheus::IntCounter,
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

fn counter(registry: &Registry, name: &str, help: &str) -> IntCounter {
    // Names are static and the registry is fresh, so neither call can fail.
    let counter = IntCounter::new(name, help).expect("valid metric definition");
    registry
        .register(Box::new(counter.clone()))
        .expect("metric registered once");
    counter
}

impl MetricsRecorder {
    pub fn new() -> Self {
        let registry = Registry::new();

        let chars_encoded = counter(
            &registry,
            "telegraph_chars_encoded_total",
            "Characters translated to Morse symbols",
        );
        let chars_dropped = counter(
            &registry,
            "telegraph_chars_dropped_total",
            "Characters without a Morse symbol",
        );
        let words_emitted = counter(
            &registry,
            "telegraph_words_emitted_total",
            "Morse words written to output",
        );
        let meetings = counter(
            &registry,
            "telegraph_meetings_total",
            "Agent meetings resolved",
        );
        let transitions = counter(
            &registry,
            "telegraph_transitions_total",
            "Agents whose condition changed in a meetup",
        );

        Self {
            registry,
            chars_encoded,
            chars_dropped,
            words_emitted,
            meetings,
            transitions,
        }
    }

    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        // The text encoder only ever writes UTF-8.
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    pub fn record_encoding(&self, chars_encoded: u64, chars_dropped: u64, words_emitted: u64) {
        self.chars_encoded.inc_by(chars_encoded);
        self.chars_dropped.inc_by(chars_dropped);
        self.words_emitted.inc_by(words_emitted);
    }

    pub fn record_meetups(&self, meetings: u64, transitions: u64) {
        self.meetings.inc_by(meetings);
        self.transitions.inc_by(transitions);
    }
}
