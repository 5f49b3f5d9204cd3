//! Error types emitted by the Lumi CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use lumi_profile::{ExtractError, ProfileUnavailable};
use thiserror::Error;

/// Errors emitted by the Lumi CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
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
    /// The locale flag named an unsupported locale.
    #[error("unknown locale {value:?} (expected ko or en)")]
    InvalidLocale { value: String },
    /// The weather flag named an unsupported condition.
    #[error("unknown weather {value:?} (expected Sunny, Clouds, Rain, or Snow)")]
    InvalidWeather { value: String },
    /// Loading the taste profile snapshot failed.
    #[error(transparent)]
    LoadProfile(#[from] ProfileUnavailable),
    /// Extracting a taste snapshot from a review export failed.
    #[error(transparent)]
    Extract(#[from] ExtractError),
    /// Opening the candidate places file failed.
    #[error("failed to open places at {path:?}: {source}")]
    OpenPlaces {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Candidate places JSON could not be decoded.
    #[error("failed to parse places JSON at {path:?}: {source}")]
    ParsePlaces {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Opening the itinerary file failed.
    #[error("failed to open itinerary at {path:?}: {source}")]
    OpenItinerary {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Itinerary JSON could not be decoded.
    #[error("failed to parse itinerary JSON at {path:?}: {source}")]
    ParseItinerary {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Serialising the command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
