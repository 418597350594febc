use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use opentelemetry::KeyValue;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use telegraph_config::TelegraphConfig;
use telegraph_meetup::{Census, Scenario};
use telegraph_morse::transliterate;
use telegraph_telemetry::{EventLogger, MetricsRecorder};

use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "telegraph", version, about)]
pub struct Cli {
    /// Configuration file (defaults to config/telegraph.yaml plus TELEGRAPH_* variables)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print Prometheus metrics once the command finishes
    #[arg(long, global = true, default_value_t = false)]
    pub metrics: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transliterate a text file into Morse code
    Morse(MorseArgs),
    /// Run the agent meetup simulation and print the resulting agents
    Meetup(MeetupArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct MorseArgs {
    /// Text file to read (default: lorem.txt)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Morse file to write (default: lorem_morse.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct MeetupArgs {
    /// Scenario YAML to run; the built-in reference scenario is used otherwise
    #[arg(short, long)]
    pub scenario: Option<PathBuf>,
    /// Number of meetup rounds (1 to 10000)
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..=10000))]
    pub rounds: Option<usize>,
}

pub fn load_config(path: Option<&Path>) -> Result<TelegraphConfig, CliError> {
    let config = match path {
        Some(path) => TelegraphConfig::load_from_path(path)?,
        None => TelegraphConfig::load()?,
    };
    Ok(config)
}

pub fn run_command<W: Write>(
    cli: Cli,
    config: &TelegraphConfig,
    metrics: &MetricsRecorder,
    out: &mut W,
) -> Result<(), CliError> {
    match cli.command {
        Commands::Morse(args) => run_morse(args, config, metrics)?,
        Commands::Meetup(args) => run_meetup(args, config, metrics, out)?,
    }

    if cli.metrics || config.telemetry.metrics {
        out.write_all(metrics.gather_metrics()?.as_bytes())?;
    }
    Ok(())
}

fn run_morse(
    args: MorseArgs,
    config: &TelegraphConfig,
    metrics: &MetricsRecorder,
) -> Result<(), CliError> {
    let input = args.input.unwrap_or_else(|| config.morse.input.clone());
    let output = args.output.unwrap_or_else(|| config.morse.output.clone());

    let stats = transliterate(&input, &output)?;

    metrics.record_encoding(
        stats.chars_encoded as u64,
        stats.chars_dropped as u64,
        stats.words_emitted as u64,
    );
    EventLogger::log_event(
        "morse",
        vec![
            KeyValue::new("input", input.display().to_string()),
            KeyValue::new("output", output.display().to_string()),
            KeyValue::new("chars_encoded", stats.chars_encoded as i64),
        ],
    );
    Ok(())
}

fn run_meetup<W: Write>(
    args: MeetupArgs,
    config: &TelegraphConfig,
    metrics: &MetricsRecorder,
    out: &mut W,
) -> Result<(), CliError> {
    // A scenario file carries its own round count; config rounds only apply
    // to the reference scenario. `--rounds` beats both.
    let scenario = match args.scenario.or_else(|| config.meetup.scenario.clone()) {
        Some(path) => {
            info!(path = %path.display(), "Loading scenario");
            Scenario::load_from_path(&path)?
        }
        None => Scenario::reference().with_rounds(config.meetup.rounds),
    };
    let scenario = match args.rounds {
        Some(rounds) => scenario.with_rounds(rounds),
        None => scenario,
    };

    let (agents, summary) = scenario.run();
    let census = Census::of(&agents);
    info!(
        agents = agents.len(),
        rounds = summary.rounds,
        meetings = summary.meetings,
        transitions = summary.transitions,
        settled = summary.settled,
        census = %census,
        "Meetup complete"
    );

    metrics.record_meetups(summary.meetings as u64, summary.transitions as u64);
    EventLogger::log_event(
        "meetup",
        vec![
            KeyValue::new("agents", agents.len() as i64),
            KeyValue::new("rounds", summary.rounds as i64),
        ],
    );

    for agent in &agents {
        writeln!(out, "{agent}")?;
    }
    Ok(())
}
