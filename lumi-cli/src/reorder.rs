//! Reorder command implementation for the Lumi CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use lumi_core::{Itinerary, Weather};
use lumi_fs::open_utf8_file;
use lumi_route::optimise;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::{
    ARG_REORDER_ITINERARY, ARG_REORDER_WEATHER, CliError, ENV_REORDER_ITINERARY,
    ENV_REORDER_WEATHER, require_existing, write_json,
};

/// CLI arguments for the `reorder` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Reorder an itinerary for the forecast weather. In bad \
                 weather (Clouds, Rain, or Snow) indoor places move to the \
                 front of the day; in good weather outdoor places lead. \
                 Relative order within each group is preserved.",
    about = "Reorder an itinerary for the forecast weather"
)]
#[ortho_config(prefix = "LUMI")]
pub(crate) struct ReorderArgs {
    /// Path to the itinerary as a JSON array of places.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) itinerary_path: Option<Utf8PathBuf>,
    /// Forecast condition (`Sunny`, `Clouds`, `Rain`, or `Snow`).
    #[arg(long = ARG_REORDER_WEATHER, value_name = "condition")]
    #[serde(default)]
    pub(crate) weather: Option<String>,
}

impl ReorderArgs {
    pub(crate) fn into_config(self) -> Result<ReorderConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ReorderConfig::try_from(merged)
    }
}

/// Resolved `reorder` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReorderConfig {
    /// Path to the itinerary file.
    pub(crate) itinerary_path: Utf8PathBuf,
    /// Forecast weather condition.
    pub(crate) weather: Weather,
}

impl ReorderConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.itinerary_path, ARG_REORDER_ITINERARY)
    }
}

impl TryFrom<ReorderArgs> for ReorderConfig {
    type Error = CliError;

    fn try_from(args: ReorderArgs) -> Result<Self, Self::Error> {
        let itinerary_path = args.itinerary_path.ok_or(CliError::MissingArgument {
            field: ARG_REORDER_ITINERARY,
            env: ENV_REORDER_ITINERARY,
        })?;
        let value = args.weather.ok_or(CliError::MissingArgument {
            field: ARG_REORDER_WEATHER,
            env: ENV_REORDER_WEATHER,
        })?;
        let weather = value
            .parse::<Weather>()
            .map_err(|_| CliError::InvalidWeather { value })?;
        Ok(Self {
            itinerary_path,
            weather,
        })
    }
}

pub(super) fn run_reorder(args: ReorderArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_reorder_with(args, &mut stdout)
}

pub(super) fn run_reorder_with(args: ReorderArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_reorder_config(args)?;
    let itinerary = load_itinerary(&config.itinerary_path)?;
    let reordered = optimise(&itinerary, config.weather);
    write_json(writer, &reordered)
}

fn resolve_reorder_config(args: ReorderArgs) -> Result<ReorderConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded itinerary from disk.
pub(super) fn load_itinerary(path: &Utf8Path) -> Result<Itinerary, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenItinerary {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseItinerary {
        path: path.to_path_buf(),
        source,
    })
}
