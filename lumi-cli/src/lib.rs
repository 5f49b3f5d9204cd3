//! Command-line interface for the Lumi taste engine.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;

mod error;
mod extract;
mod rank;
mod reorder;

pub use error::CliError;

use extract::ExtractArgs;
use rank::RankArgs;
use reorder::ReorderArgs;

const ARG_EXTRACT_EXPORT: &str = "export";
const ARG_EXTRACT_OUTPUT: &str = "output";
const ARG_EXTRACT_USER: &str = "user";
const ARG_RANK_PLACES: &str = "places";
const ARG_RANK_PROFILE: &str = "profile";
const ARG_RANK_LOCALE: &str = "locale";
const ARG_RANK_ALLOW_UNRANKED: &str = "allow-unranked";
const ARG_REORDER_ITINERARY: &str = "itinerary";
const ARG_REORDER_WEATHER: &str = "weather";
const ENV_EXTRACT_EXPORT: &str = "LUMI_CMDS_EXTRACT_EXPORT_PATH";
const ENV_EXTRACT_USER: &str = "LUMI_CMDS_EXTRACT_USER";
const ENV_RANK_PLACES: &str = "LUMI_CMDS_RANK_PLACES_PATH";
const ENV_REORDER_ITINERARY: &str = "LUMI_CMDS_REORDER_ITINERARY_PATH";
const ENV_REORDER_WEATHER: &str = "LUMI_CMDS_REORDER_WEATHER";

/// Default snapshot filename shared by `extract` output and `rank` input.
const DEFAULT_PROFILE_FILENAME: &str = "taste-profile.json";

/// Run the Lumi CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Extract(args) => extract::run_extract(args),
        Command::Rank(args) => rank::run_rank(args),
        Command::Reorder(args) => reorder::run_reorder(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "lumi",
    about = "Taste-led place ranking utilities for the Lumi engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Distil a taste profile snapshot from a review export.
    Extract(ExtractArgs),
    /// Rank candidate places against a stored taste profile.
    Rank(RankArgs),
    /// Reorder an itinerary for the forecast weather.
    Reorder(ReorderArgs),
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match lumi_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
