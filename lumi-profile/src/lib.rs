//! Taste-profile persistence: loading snapshots and extracting them from
//! review exports.
//!
//! A snapshot is the engine's on-disk profile format. The loader turns a
//! snapshot file into a [`lumi_core::TasteProfile`] for ranking; the
//! extractor builds snapshot files from Takeout-style review exports.
//! Ranking itself never touches the filesystem, so this crate is the only
//! place profile IO happens.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod extract;
mod snapshot;

pub use error::{ExtractError, ProfileUnavailable};
pub use extract::{
    DEFAULT_STYLE_KEYWORDS, EXPORT_SAMPLE_CAP, KEEP_RATING_THRESHOLD, extract_snapshot,
    extract_to_file, write_snapshot,
};
pub use snapshot::{SnapshotReview, TasteSnapshot, load_taste_profile};
