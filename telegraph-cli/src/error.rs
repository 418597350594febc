use telegraph_config::ConfigError;
use telegraph_meetup::ScenarioError;
use telegraph_morse::MorseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Morse(#[from] MorseError),

    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    #[error("Failed to write command output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to render metrics: {0}")]
    Metrics(#[from] prometheus::Error),
}
