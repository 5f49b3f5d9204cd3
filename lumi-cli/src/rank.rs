//! Rank command implementation for the Lumi CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use lumi_core::Place;
use lumi_fs::open_utf8_file;
use lumi_profile::load_taste_profile;
use lumi_ranker::{Locale, PlaceRanker};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::{
    ARG_RANK_ALLOW_UNRANKED, ARG_RANK_LOCALE, ARG_RANK_PLACES, ARG_RANK_PROFILE, CliError,
    DEFAULT_PROFILE_FILENAME, ENV_RANK_PLACES, require_existing, write_json,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank candidate places against a stored taste profile. \
                 Candidates are read as a JSON array of places and the \
                 profile is the snapshot produced by `lumi extract`. The \
                 ranked list, including affinity scores and tips, is \
                 written to stdout as JSON.",
    about = "Rank candidate places by taste affinity"
)]
#[ortho_config(prefix = "LUMI")]
pub(crate) struct RankArgs {
    /// Path to a JSON array of candidate places.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) places_path: Option<Utf8PathBuf>,
    /// Override the path to the taste profile snapshot.
    #[arg(long = ARG_RANK_PROFILE, value_name = "path")]
    #[serde(default)]
    pub(crate) profile: Option<Utf8PathBuf>,
    /// Locale for the generated tips (`ko` or `en`).
    #[arg(long = ARG_RANK_LOCALE, value_name = "locale")]
    #[serde(default)]
    pub(crate) locale: Option<String>,
    /// Emit the candidates unranked when the profile snapshot is unusable.
    #[arg(long = ARG_RANK_ALLOW_UNRANKED)]
    #[serde(default)]
    pub(crate) allow_unranked: bool,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    /// Path to the candidate places file.
    pub(crate) places_path: Utf8PathBuf,
    /// Path to the taste profile snapshot.
    pub(crate) profile_path: Utf8PathBuf,
    /// Locale used for tip generation.
    pub(crate) locale: Locale,
    /// Degrade to unranked output when the snapshot is unusable.
    pub(crate) allow_unranked: bool,
}

impl RankConfig {
    /// Only the candidate list must exist up front; the snapshot is checked
    /// at load time so `--allow-unranked` can degrade instead of failing.
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.places_path, ARG_RANK_PLACES)
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let places_path = args.places_path.ok_or(CliError::MissingArgument {
            field: ARG_RANK_PLACES,
            env: ENV_RANK_PLACES,
        })?;
        let profile_path = args
            .profile
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_PROFILE_FILENAME));
        let locale = match args.locale {
            Some(value) => value
                .parse::<Locale>()
                .map_err(|_| CliError::InvalidLocale { value })?,
            None => Locale::default(),
        };
        Ok(Self {
            places_path,
            profile_path,
            locale,
            allow_unranked: args.allow_unranked,
        })
    }
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(super) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_rank_config(args)?;
    let places = load_places(&config.places_path)?;
    match load_taste_profile(&config.profile_path) {
        Ok(profile) => {
            let ranked = PlaceRanker::with_locale(config.locale).rank(places, &profile);
            write_json(writer, &ranked)
        }
        Err(source) if config.allow_unranked => {
            log::warn!("serving {} places unranked: {source}", places.len());
            write_json(writer, &places)
        }
        Err(source) => Err(CliError::LoadProfile(source)),
    }
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads the JSON array of candidate places from disk.
pub(super) fn load_places(path: &Utf8Path) -> Result<Vec<Place>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenPlaces {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParsePlaces {
        path: path.to_path_buf(),
        source,
    })
}
