//! Extraction of taste snapshots from location-history review exports.
#![forbid(unsafe_code)]

use std::io::{BufReader, Write as _};

use camino::Utf8Path;
use serde::Deserialize;

use crate::error::ExtractError;
use crate::snapshot::{SnapshotReview, TasteSnapshot};

/// Maximum number of reviews retained in an extracted snapshot.
pub const EXPORT_SAMPLE_CAP: usize = 100;

/// Minimum star rating that keeps a review regardless of its text.
pub const KEEP_RATING_THRESHOLD: f64 = 4.0;

/// Style keywords assigned to every extracted snapshot.
pub const DEFAULT_STYLE_KEYWORDS: [&str; 8] = [
    "modern", "minimal", "local", "traditional", "cozy", "친절", "깔끔", "맛있음",
];

#[derive(Debug, Default, Deserialize)]
struct ReviewExport {
    #[serde(default)]
    features: Vec<ExportFeature>,
}

#[derive(Debug, Default, Deserialize)]
struct ExportFeature {
    #[serde(default)]
    properties: ExportProperties,
}

#[derive(Debug, Default, Deserialize)]
struct ExportProperties {
    #[serde(default)]
    location: ExportLocation,
    #[serde(default)]
    five_star_rating_published: f64,
    #[serde(default)]
    review_text_published: String,
    #[serde(default)]
    date: String,
}

#[derive(Debug, Default, Deserialize)]
struct ExportLocation {
    #[serde(default)]
    name: String,
}

/// Extract a taste snapshot from a Takeout-style review export.
///
/// Keeps reviews rated at least [`KEEP_RATING_THRESHOLD`] stars or carrying
/// non-blank text, in export order, up to [`EXPORT_SAMPLE_CAP`] entries.
/// The snapshot receives [`DEFAULT_STYLE_KEYWORDS`] as its keyword set.
pub fn extract_snapshot(
    export_path: &Utf8Path,
    user: &str,
) -> Result<TasteSnapshot, ExtractError> {
    let file = lumi_fs::open_utf8_file(export_path).map_err(|source| ExtractError::OpenExport {
        path: export_path.to_owned(),
        source,
    })?;
    let export: ReviewExport = serde_json::from_reader(BufReader::new(file)).map_err(
        |source| ExtractError::ParseExport {
            path: export_path.to_owned(),
            source,
        },
    )?;
    if export.features.is_empty() {
        log::warn!("review export at {export_path} contains no features");
    }

    let reviews: Vec<SnapshotReview> = export
        .features
        .into_iter()
        .map(|feature| feature.properties)
        .filter(keeps_review)
        .take(EXPORT_SAMPLE_CAP)
        .map(|properties| SnapshotReview {
            place: properties.location.name,
            rating: properties.five_star_rating_published,
            text: properties.review_text_published,
            date: properties.date,
        })
        .collect();
    log::debug!("kept {} reviews for {user}", reviews.len());

    Ok(TasteSnapshot {
        user: user.to_owned(),
        style_keywords: DEFAULT_STYLE_KEYWORDS
            .iter()
            .map(|&keyword| keyword.to_owned())
            .collect(),
        reviews,
    })
}

/// Serialise a snapshot as pretty-printed JSON at `output_path`.
///
/// Parent directories are created as needed and the output ends with a
/// trailing newline.
pub fn write_snapshot(
    snapshot: &TasteSnapshot,
    output_path: &Utf8Path,
) -> Result<(), ExtractError> {
    lumi_fs::ensure_parent_dir(output_path).map_err(|source| ExtractError::CreateParent {
        path: output_path.to_owned(),
        source,
    })?;
    let mut file =
        lumi_fs::create_utf8_file(output_path).map_err(|source| ExtractError::WriteSnapshot {
            path: output_path.to_owned(),
            source,
        })?;
    serde_json::to_writer_pretty(&mut file, snapshot).map_err(|source| {
        ExtractError::SerialiseSnapshot {
            path: output_path.to_owned(),
            source,
        }
    })?;
    file.write_all(b"\n")
        .map_err(|source| ExtractError::WriteSnapshot {
            path: output_path.to_owned(),
            source,
        })?;
    Ok(())
}

/// Extract a snapshot from `export_path` and persist it at `output_path`.
///
/// Returns the extracted snapshot so callers can report what was written.
pub fn extract_to_file(
    export_path: &Utf8Path,
    output_path: &Utf8Path,
    user: &str,
) -> Result<TasteSnapshot, ExtractError> {
    let snapshot = extract_snapshot(export_path, user)?;
    write_snapshot(&snapshot, output_path)?;
    Ok(snapshot)
}

fn keeps_review(properties: &ExportProperties) -> bool {
    properties.five_star_rating_published >= KEEP_RATING_THRESHOLD
        || !properties.review_text_published.trim().is_empty()
}
