//! # Telegraph Configuration System
//!
//! Layered configuration for the `telegraph` binary.
//!
//! ## Layers
//! 1. Built-in defaults
//! 2. `config/telegraph.yaml`, when present
//! 3. `config/<TELEGRAPH_ENV>.yaml`, when present
//! 4. `TELEGRAPH_*` environment variables, `__` separating sections
//!    (`TELEGRAPH_MEETUP__ROUNDS=3`)
//!
//! Command-line flags are applied on top by the binary.

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod error;
mod meetup;
mod morse;
mod telemetry;
mod validation;

pub use error::ConfigError;
pub use meetup::MeetupConfig;
pub use morse::MorseConfig;
pub use telemetry::TelemetryConfig;

const BASE_FILE: &str = "config/telegraph.yaml";
const ENV_PREFIX: &str = "TELEGRAPH_";

/// Top-level configuration container.
#[derive(Debug, Serialize, Deserialize, Validate, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TelegraphConfig {
    /// Transliterator input and output paths.
    #[validate(nested)]
    pub morse: MorseConfig,

    /// Meetup simulation parameters.
    #[validate(nested)]
    pub meetup: MeetupConfig,

    /// Logging and metrics.
    #[validate(nested)]
    pub telemetry: TelemetryConfig,
}

impl TelegraphConfig {
    fn defaults() -> Figment {
        Figment::from(Serialized::defaults(TelegraphConfig::default()))
    }

    fn finish(figment: Figment) -> Result<Self, ConfigError> {
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }

    /// Load configuration from the default files and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Self::defaults();

        if Path::new(BASE_FILE).exists() {
            figment = figment.merge(Yaml::file(BASE_FILE));
        }

        if let Ok(env) = std::env::var("TELEGRAPH_ENV") {
            let env_file = format!("config/{}.yaml", env);
            if Path::new(&env_file).exists() {
                figment = figment.merge(Yaml::file(env_file));
            }
        }

        Self::finish(figment)
    }

    /// Load configuration from an explicit file; defaults fill the gaps and
    /// the environment still overrides.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(path)));
        }

        Self::finish(Self::defaults().merge(Yaml::file(path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn load() -> Result<TelegraphConfig, figment::Error> {
        TelegraphConfig::load().map_err(|e| figment::Error::from(e.to_string()))
    }

    fn load_from(path: &str) -> Result<TelegraphConfig, figment::Error> {
        TelegraphConfig::load_from_path(path).map_err(|e| figment::Error::from(e.to_string()))
    }

    #[test]
    fn default_config_validates() {
        let config = TelegraphConfig::default();
        config.validate().expect("Default config should validate");
        assert_eq!(config.morse.input, PathBuf::from("lorem.txt"));
        assert_eq!(config.morse.output, PathBuf::from("lorem_morse.txt"));
        assert_eq!(config.meetup.rounds, 1);
    }

    #[test]
    fn load_without_files_is_default() {
        Jail::expect_with(|_jail| {
            assert_eq!(load()?, TelegraphConfig::default());
            Ok(())
        });
    }

    #[test]
    fn base_file_then_env_file_then_environment() {
        Jail::expect_with(|jail| {
            std::fs::create_dir("config").map_err(|e| e.to_string())?;
            jail.create_file(
                "config/telegraph.yaml",
                "morse:\n  input: book.txt\nmeetup:\n  rounds: 4\n",
            )?;
            jail.create_file("config/ci.yaml", "meetup:\n  rounds: 6\n")?;
            jail.set_env("TELEGRAPH_ENV", "ci");
            jail.set_env("TELEGRAPH_TELEMETRY__LOG_LEVEL", "debug");

            let config = load()?;
            assert_eq!(config.morse.input, PathBuf::from("book.txt"));
            assert_eq!(config.morse.output, PathBuf::from("lorem_morse.txt"));
            assert_eq!(config.meetup.rounds, 6);
            assert_eq!(config.telemetry.log_level, "debug");
            Ok(())
        });
    }

    #[test]
    fn environment_override() {
        Jail::expect_with(|jail| {
            jail.set_env("TELEGRAPH_MEETUP__ROUNDS", "12");
            let config = load()?;
            assert_eq!(config.meetup.rounds, 12);
            Ok(())
        });
    }

    #[test]
    fn explicit_path() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "custom.yaml",
                "meetup:\n  scenario: scenarios/outbreak.yaml\ntelemetry:\n  metrics: true\n",
            )?;
            let config = load_from("custom.yaml")?;
            assert_eq!(
                config.meetup.scenario,
                Some(PathBuf::from("scenarios/outbreak.yaml"))
            );
            assert!(config.telemetry.metrics);
            assert_eq!(config.telemetry.log_level, "info");
            Ok(())
        });
    }

    #[test]
    fn missing_explicit_path() {
        let err = TelegraphConfig::load_from_path("definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn invalid_values_are_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "bad.yaml",
                "meetup:\n  rounds: 0\ntelemetry:\n  log_level: loud\n",
            )?;
            let err = TelegraphConfig::load_from_path("bad.yaml").unwrap_err();
            let message = err.to_string();
            assert!(matches!(err, ConfigError::Validation(_)));
            assert!(message.contains("meetup.rounds"), "{message}");
            assert!(message.contains("telemetry.log_level"), "{message}");
            Ok(())
        });
    }
}
