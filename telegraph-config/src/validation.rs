//! Custom validation functions for configuration.

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    static ref LOG_LEVEL: Regex =
        Regex::new("^(?i)(trace|debug|info|warn|error|off)$").expect("valid log level regex");
}

/// Validate that a path setting is not blank.
pub fn validate_path(path: &Path) -> Result<(), ValidationError> {
    if path.as_os_str().is_empty() || path.to_string_lossy().trim().is_empty() {
        return Err(ValidationError::new("empty_path"));
    }
    Ok(())
}

/// Validate a plain `tracing` level name.
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if LOG_LEVEL.is_match(level) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level"))
    }
}
