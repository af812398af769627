//! Stress command implementation for the Drape CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use drape_core::{SampleSeries, UserBaseline};
use drape_signals::compute_stress_index;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_STRESS_SAMPLES, CliError, ENV_STRESS_SAMPLES, fs, load_json, write_json};

/// CLI arguments for the `stress` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Compute the stress index of a session. The input is a JSON \
                 document holding the wearer's baseline and a time-ordered \
                 list of physiological samples.",
    about = "Compute a stress index from samples"
)]
#[ortho_config(prefix = "DRAPE")]
pub(crate) struct StressArgs {
    /// Path to a JSON file containing `{ baseline, samples }`.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) samples_path: Option<Utf8PathBuf>,
}

impl StressArgs {
    pub(crate) fn into_config(self) -> Result<StressConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        StressConfig::try_from(merged)
    }
}

/// Resolved `stress` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StressConfig {
    pub(crate) samples_path: Utf8PathBuf,
}

impl TryFrom<StressArgs> for StressConfig {
    type Error = CliError;

    fn try_from(args: StressArgs) -> Result<Self, Self::Error> {
        let samples_path = args.samples_path.ok_or(CliError::MissingArgument {
            field: ARG_STRESS_SAMPLES,
            env: ENV_STRESS_SAMPLES,
        })?;
        Ok(Self { samples_path })
    }
}

/// Input document of the `stress` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct StressRequest {
    pub(crate) baseline: UserBaseline,
    pub(crate) samples: SampleSeries,
}

/// Output document of the `stress` command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct StressResponse {
    pub(crate) stress_index: f64,
}

pub(crate) fn run_stress_with(args: StressArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    fs::require_existing(&config.samples_path, ARG_STRESS_SAMPLES)?;
    let request: StressRequest = load_json(&config.samples_path)?;
    let stress_index = compute_stress_index(request.samples.as_slice(), request.baseline)?;
    write_json(writer, &StressResponse { stress_index })
}
