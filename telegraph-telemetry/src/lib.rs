//! # Telegraph Telemetry
//!
//! Crate for logging and metrics shared by the transliterator and the
//! meetup simulator.

pub mod logging;
pub mod metrics;

pub use logging::EventLogger;
pub use metrics::MetricsRecorder;
