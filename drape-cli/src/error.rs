//! Error types emitted by the Drape CLI.
//!
//! Each failure of the engine crates keeps its own variant so callers can
//! tell bad biometrics from bad context or a broken catalog.

use std::sync::Arc;

use camino::Utf8PathBuf;
use drape_core::ClothingItemError;
use drape_fusion::FusionError;
use drape_signals::StressError;
use thiserror::Error;

/// Errors emitted by the Drape CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass <{field}> or set {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// `--top-k` was zero.
    #[error("top-k must be at least 1")]
    ZeroTopK,
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the request file failed.
    #[error("failed to open request at {path:?}: {source}")]
    OpenRequest {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Request JSON could not be decoded.
    #[error("failed to parse request JSON at {path:?}: {source}")]
    ParseRequest {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A catalog entry carried an invalid id or component score.
    #[error("catalog item {index} in {path:?} is invalid: {source}")]
    InvalidCatalogItem {
        path: Utf8PathBuf,
        index: usize,
        #[source]
        source: ClothingItemError,
    },
    /// The stress index could not be computed from the samples.
    #[error("failed to compute stress index: {0}")]
    Stress(#[from] StressError),
    /// Context signals could not be fused into a style target.
    #[error("failed to fuse signals: {0}")]
    Fusion(#[from] FusionError),
    /// Serialising the response failed.
    #[error("failed to serialise response: {0}")]
    SerialiseResponse(#[source] serde_json::Error),
    /// Writing the response failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
