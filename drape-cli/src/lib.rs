//! Command-line interface for the Drape recommendation engine.
//!
//! `drape recommend` runs the whole pipeline on a JSON request: stress from
//! biometric samples, fusion with weather, calendar and mood, then ranking of
//! a clothing catalog. `drape stress` stops after the first stage.
//!
//! Options layer as defaults, configuration file, `DRAPE_*` environment
//! variables and finally command-line flags.
#![forbid(unsafe_code)]

use std::io::{BufReader, Write};

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde::de::DeserializeOwned;

mod error;
mod fs;
mod recommend;
mod stress;

pub use error::CliError;

use recommend::{DefaultRankerBuilder, RecommendArgs, run_recommend_with};
use stress::{StressArgs, run_stress_with};

pub(crate) const ARG_RECOMMEND_REQUEST: &str = "request";
pub(crate) const ENV_RECOMMEND_REQUEST: &str = "DRAPE_CMDS_RECOMMEND_REQUEST_PATH";
pub(crate) const ARG_STRESS_SAMPLES: &str = "samples";
pub(crate) const ENV_STRESS_SAMPLES: &str = "DRAPE_CMDS_STRESS_SAMPLES_PATH";
pub(crate) const ARG_TOP_K: &str = "top-k";
pub(crate) const ARG_STRESS_WEIGHT: &str = "stress-weight";
pub(crate) const ARG_WEATHER_WEIGHT: &str = "weather-weight";
pub(crate) const ARG_EVENT_WEIGHT: &str = "event-weight";
pub(crate) const ARG_MOOD_WEIGHT: &str = "mood-weight";
pub(crate) const ARG_UNKNOWN_INPUT: &str = "unknown-input";
pub(crate) const ARG_CLAMP_STYLE: &str = "clamp-style";

/// Run the Drape CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when parsing, configuration, input loading or any
/// pipeline stage fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Recommend(args) => run_recommend_with(args, &DefaultRankerBuilder, writer),
        Command::Stress(args) => run_stress_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "drape",
    about = "Outfit recommendations from biometrics and context",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a clothing catalog for the current wearer and context.
    Recommend(RecommendArgs),
    /// Compute the stress index for a session of samples.
    Stress(StressArgs),
}

/// Decode a JSON document from `path`.
pub(crate) fn load_json<T>(path: &Utf8Path) -> Result<T, CliError>
where
    T: DeserializeOwned,
{
    let file = fs::open_utf8_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: Serialize,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
