//! Extract command implementation for the Lumi CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use lumi_profile::extract_to_file;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_EXTRACT_EXPORT, ARG_EXTRACT_OUTPUT, ARG_EXTRACT_USER, CliError, DEFAULT_PROFILE_FILENAME,
    ENV_EXTRACT_EXPORT, ENV_EXTRACT_USER, require_existing,
};

/// CLI arguments for the `extract` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Distil a taste profile snapshot from a Takeout-style \
                 review export. Reviews rated four stars or higher, or \
                 carrying written text, are kept (up to one hundred) and \
                 stored alongside the default style keywords.",
    about = "Distil a taste profile snapshot from a review export"
)]
#[ortho_config(prefix = "LUMI")]
pub(crate) struct ExtractArgs {
    /// Path to the review export JSON document.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) export_path: Option<Utf8PathBuf>,
    /// Name of the traveller the profile belongs to.
    #[arg(long = ARG_EXTRACT_USER, value_name = "name")]
    #[serde(default)]
    pub(crate) user: Option<String>,
    /// Override the snapshot output path.
    #[arg(long = ARG_EXTRACT_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ExtractArgs {
    pub(crate) fn into_config(self) -> Result<ExtractConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ExtractConfig::try_from(merged)
    }
}

/// Resolved `extract` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExtractConfig {
    /// Path to the review export document.
    pub(crate) export_path: Utf8PathBuf,
    /// Path the snapshot is written to.
    pub(crate) output_path: Utf8PathBuf,
    /// Traveller the profile belongs to.
    pub(crate) user: String,
}

impl ExtractConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.export_path, ARG_EXTRACT_EXPORT)
    }
}

impl TryFrom<ExtractArgs> for ExtractConfig {
    type Error = CliError;

    fn try_from(args: ExtractArgs) -> Result<Self, Self::Error> {
        let export_path = args.export_path.ok_or(CliError::MissingArgument {
            field: ARG_EXTRACT_EXPORT,
            env: ENV_EXTRACT_EXPORT,
        })?;
        let user = args.user.ok_or(CliError::MissingArgument {
            field: ARG_EXTRACT_USER,
            env: ENV_EXTRACT_USER,
        })?;
        let output_path = args
            .output
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_PROFILE_FILENAME));
        Ok(Self {
            export_path,
            output_path,
            user,
        })
    }
}

pub(super) fn run_extract(args: ExtractArgs) -> Result<(), CliError> {
    let config = resolve_extract_config(args)?;
    let snapshot = extract_to_file(&config.export_path, &config.output_path, &config.user)?;
    log::info!(
        "wrote taste snapshot for {} with {} reviews to {}",
        config.user,
        snapshot.reviews.len(),
        config.output_path
    );
    Ok(())
}

fn resolve_extract_config(args: ExtractArgs) -> Result<ExtractConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}
