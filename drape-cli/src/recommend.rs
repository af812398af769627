//! Recommend command implementation for the Drape CLI.

use std::io::Write;
use std::num::NonZeroUsize;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use drape_core::{
    CalendarEvent, ClothingItem, RankedItem, Ranker, SampleSeries, StyleVector,
    UnknownInputPolicy, UserBaseline,
};
use drape_fusion::{FusionWeights, RawSignals, RawWeather, fuse_raw};
use drape_ranker::{CompatibilityRanker, CompatibilityScorer};
use drape_signals::compute_stress_index;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CLAMP_STYLE, ARG_EVENT_WEIGHT, ARG_MOOD_WEIGHT, ARG_RECOMMEND_REQUEST, ARG_STRESS_WEIGHT,
    ARG_TOP_K, ARG_UNKNOWN_INPUT, ARG_WEATHER_WEIGHT, CliError, ENV_RECOMMEND_REQUEST, fs,
    load_json, write_json,
};

/// Number of recommendations returned when `--top-k` is not set.
pub(crate) const DEFAULT_TOP_K: NonZeroUsize = NonZeroUsize::MIN.saturating_add(4);

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Recommend clothing for the current wearer. The request is a \
                 JSON document holding the wearer's baseline, recent \
                 physiological samples, weather, upcoming events, mood and \
                 the catalog to rank. Fusion weights and the handling of \
                 unrecognised moods or weather conditions can come from CLI \
                 flags, configuration files, or environment variables.",
    about = "Rank a catalog against the wearer's current style target"
)]
#[ortho_config(prefix = "DRAPE")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing a recommendation request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Number of items to return (default 5).
    #[arg(long = ARG_TOP_K, value_name = "count")]
    #[serde(default)]
    pub(crate) top_k: Option<usize>,
    /// Weight of the stress signal (default 0.3).
    #[arg(long = ARG_STRESS_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) stress_weight: Option<f64>,
    /// Weight of the weather signal (default 0.4).
    #[arg(long = ARG_WEATHER_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) weather_weight: Option<f64>,
    /// Weight of the calendar signal (default 0.2).
    #[arg(long = ARG_EVENT_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) event_weight: Option<f64>,
    /// Weight of the mood signal (default 0.1).
    #[arg(long = ARG_MOOD_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) mood_weight: Option<f64>,
    /// How to treat unrecognised moods and weather conditions.
    #[arg(long = ARG_UNKNOWN_INPUT, value_name = "reject|fallback")]
    #[serde(default)]
    pub(crate) unknown_input: Option<UnknownInputPolicy>,
    /// Clamp the style target into `0.0..=1.0` before ranking.
    #[arg(long = ARG_CLAMP_STYLE)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) clamp_style: bool,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Maximum number of ranked items to print.
    pub(crate) top_k: NonZeroUsize,
    /// Fusion weights after layering over the defaults.
    pub(crate) weights: FusionWeights,
    /// Unknown-input handling for mood and weather.
    pub(crate) policy: UnknownInputPolicy,
    /// Whether the style target is clamped before ranking.
    pub(crate) clamp_style: bool,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        fs::require_existing(&self.request_path, ARG_RECOMMEND_REQUEST)
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_REQUEST,
            env: ENV_RECOMMEND_REQUEST,
        })?;
        let top_k = match args.top_k {
            None => DEFAULT_TOP_K,
            Some(count) => NonZeroUsize::new(count).ok_or(CliError::ZeroTopK)?,
        };
        let defaults = FusionWeights::default();
        let weights = FusionWeights {
            stress: args.stress_weight.unwrap_or(defaults.stress),
            weather: args.weather_weight.unwrap_or(defaults.weather),
            event: args.event_weight.unwrap_or(defaults.event),
            mood: args.mood_weight.unwrap_or(defaults.mood),
        };
        Ok(Self {
            request_path,
            top_k,
            weights,
            policy: args.unknown_input.unwrap_or_default(),
            clamp_style: args.clamp_style,
        })
    }
}

/// Input document of the `recommend` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RecommendRequest {
    pub(crate) baseline: UserBaseline,
    pub(crate) samples: SampleSeries,
    pub(crate) weather: RawWeather,
    #[serde(default)]
    pub(crate) events: Vec<CalendarEvent>,
    pub(crate) mood: String,
    pub(crate) catalog: Vec<ClothingItem>,
}

/// Output document of the `recommend` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RecommendResponse {
    pub(crate) stress_index: f64,
    pub(crate) style: StyleVector,
    pub(crate) results: Vec<RankedItem>,
}

/// Builds the ranker for the current recommend invocation.
pub(crate) trait RankerBuilder {
    fn build(&self, config: &RecommendConfig) -> Box<dyn Ranker>;
}

pub(crate) struct DefaultRankerBuilder;

impl RankerBuilder for DefaultRankerBuilder {
    fn build(&self, _config: &RecommendConfig) -> Box<dyn Ranker> {
        Box::new(CompatibilityRanker::<CompatibilityScorer>::default())
    }
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    builder: &dyn RankerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let response = execute_recommend(args, builder)?;
    write_json(writer, &response)
}

fn execute_recommend(
    args: RecommendArgs,
    builder: &dyn RankerBuilder,
) -> Result<RecommendResponse, CliError> {
    let config = resolve_recommend_config(args)?;
    let request = load_recommend_request(&config.request_path)?;
    recommend(&config, request, builder)
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`RecommendRequest`] and validates its catalog.
pub(crate) fn load_recommend_request(path: &Utf8Path) -> Result<RecommendRequest, CliError> {
    let request: RecommendRequest = load_json(path)?;
    for (index, item) in request.catalog.iter().enumerate() {
        item.validate()
            .map_err(|source| CliError::InvalidCatalogItem {
                path: path.to_path_buf(),
                index,
                source,
            })?;
    }
    Ok(request)
}

/// Run stress, fusion and ranking over an already-loaded request.
pub(crate) fn recommend(
    config: &RecommendConfig,
    request: RecommendRequest,
    builder: &dyn RankerBuilder,
) -> Result<RecommendResponse, CliError> {
    let RecommendRequest {
        baseline,
        samples,
        weather,
        events,
        mood,
        catalog,
    } = request;
    let stress_index = compute_stress_index(samples.as_slice(), baseline)?;
    let signals = RawSignals {
        stress_index,
        weather,
        events,
        mood,
    };
    let fused = fuse_raw(&signals, config.weights, config.policy)?;
    let style = if config.clamp_style {
        fused.clamped()
    } else {
        fused
    };
    let ranker = builder.build(config);
    let results = ranker.rank(&catalog, &style, config.top_k);
    Ok(RecommendResponse {
        stress_index,
        style,
        results,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
