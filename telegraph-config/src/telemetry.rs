//! Observability configuration.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

use crate::validation;

/// Telemetry configuration.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Default `tracing` level; `RUST_LOG` takes precedence.
    #[validate(custom(function = validation::validate_log_level))]
    pub log_level: String,

    /// Print Prometheus metrics after each command.
    pub metrics: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            metrics: false,
        }
    }
}
