//! ## telegraph-cli
//! **Command-line entrypoint for both utilities**
//!
//! - `telegraph morse`: transliterate a text file into Morse code
//! - `telegraph meetup`: run the agent meetup simulation
//!
//! Results go to stdout, logs go to stderr.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use telegraph_telemetry::logging::EventLogger;
use telegraph_telemetry::metrics::MetricsRecorder;
use tracing::error;

mod commands;
mod error;

use commands::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match commands::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("telegraph: {err}");
            return ExitCode::FAILURE;
        }
    };

    EventLogger::init(&config.telemetry.log_level);
    let metrics = MetricsRecorder::new();

    let stdout = io::stdout();
    match commands::run_command(cli, &config, &metrics, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Command failed");
            eprintln!("telegraph: {err}");
            ExitCode::FAILURE
        }
    }
}
