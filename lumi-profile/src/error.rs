//! Error types raised while loading or extracting taste data.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that make a taste profile unavailable to ranking.
#[derive(Debug, Error)]
pub enum ProfileUnavailable {
    /// Opening the snapshot file failed.
    #[error("failed to open taste snapshot at {path}")]
    OpenSnapshot {
        /// Requested snapshot path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Parsing the snapshot JSON failed.
    #[error("failed to parse taste snapshot at {path}")]
    ParseSnapshot {
        /// Offending snapshot path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The snapshot parsed but carries no keywords and no reviews.
    #[error("taste snapshot at {path} is empty")]
    EmptySnapshot {
        /// Offending snapshot path.
        path: Utf8PathBuf,
    },
}

/// Errors raised while extracting or persisting a taste snapshot.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Opening the review export failed.
    #[error("failed to open review export at {path}")]
    OpenExport {
        /// Requested export path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Parsing the review export failed.
    #[error("failed to parse review export at {path}")]
    ParseExport {
        /// Offending export path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Creating the parent directory for the snapshot failed.
    #[error("failed to create parent directory for {path}")]
    CreateParent {
        /// Target snapshot path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Writing the snapshot file failed.
    #[error("failed to write taste snapshot at {path}")]
    WriteSnapshot {
        /// Target snapshot path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Serialising the snapshot to JSON failed.
    #[error("failed to serialise taste snapshot into {path}")]
    SerialiseSnapshot {
        /// Target snapshot path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}
