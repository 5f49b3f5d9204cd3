//! Loading persisted taste snapshots into ranking profiles.
#![forbid(unsafe_code)]

use std::io::BufReader;

use camino::Utf8Path;
use lumi_core::{ProfileReview, TasteProfile};
use serde::{Deserialize, Serialize};

use crate::error::ProfileUnavailable;

/// One review entry in a persisted snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SnapshotReview {
    /// Name of the reviewed place.
    #[serde(default)]
    pub place: String,
    /// Star rating awarded.
    #[serde(default)]
    pub rating: f64,
    /// Review text.
    #[serde(default)]
    pub text: String,
    /// Date the review was published.
    #[serde(default)]
    pub date: String,
}

/// A visitor's persisted taste dataset as written by the extractor.
///
/// Only `user` is required; a snapshot with neither keywords nor reviews is
/// well-formed JSON but useless for ranking and is rejected by the loader.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TasteSnapshot {
    /// Display name of the snapshot owner.
    pub user: String,
    /// Style keywords chosen for the owner.
    #[serde(default)]
    pub style_keywords: Vec<String>,
    /// Review history retained by the extractor.
    #[serde(default)]
    pub reviews: Vec<SnapshotReview>,
}

impl TasteSnapshot {
    /// `true` when the snapshot carries neither keywords nor reviews.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.style_keywords.is_empty() && self.reviews.is_empty()
    }

    /// Convert the snapshot into a ranking profile.
    #[must_use]
    pub fn into_profile(self) -> TasteProfile {
        let review_sample: Vec<ProfileReview> = self
            .reviews
            .into_iter()
            .map(|review| ProfileReview::new(review.text, review.rating))
            .collect();
        TasteProfile::new(self.user, self.style_keywords, review_sample)
    }
}

/// Load a taste profile from a snapshot file.
///
/// Fails with [`ProfileUnavailable`] when the file cannot be opened, does
/// not parse, or carries no taste data. Callers ranking on a best-effort
/// basis can treat the error as "serve unranked" rather than aborting.
pub fn load_taste_profile(path: &Utf8Path) -> Result<TasteProfile, ProfileUnavailable> {
    let file =
        lumi_fs::open_utf8_file(path).map_err(|source| ProfileUnavailable::OpenSnapshot {
            path: path.to_owned(),
            source,
        })?;
    let snapshot: TasteSnapshot = serde_json::from_reader(BufReader::new(file)).map_err(
        |source| ProfileUnavailable::ParseSnapshot {
            path: path.to_owned(),
            source,
        },
    )?;
    if snapshot.is_empty() {
        log::warn!("taste snapshot at {path} carries no taste data");
        return Err(ProfileUnavailable::EmptySnapshot {
            path: path.to_owned(),
        });
    }
    Ok(snapshot.into_profile())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{SnapshotReview, TasteSnapshot};

    fn review(text: &str, rating: f64) -> SnapshotReview {
        SnapshotReview {
            place: "Dansang".to_owned(),
            rating,
            text: text.to_owned(),
            date: "2024-03-01".to_owned(),
        }
    }

    #[rstest]
    fn a_snapshot_without_taste_data_is_empty() {
        let snapshot = TasteSnapshot {
            user: "Yuna".to_owned(),
            ..TasteSnapshot::default()
        };
        assert!(snapshot.is_empty());
    }

    #[rstest]
    fn keywords_alone_make_a_snapshot_usable() {
        let snapshot = TasteSnapshot {
            user: "Yuna".to_owned(),
            style_keywords: vec!["cozy".to_owned()],
            reviews: Vec::new(),
        };
        assert!(!snapshot.is_empty());
    }

    #[rstest]
    fn into_profile_carries_keywords_and_reviews() {
        let snapshot = TasteSnapshot {
            user: "Yuna".to_owned(),
            style_keywords: vec![" Cozy ".to_owned()],
            reviews: vec![review("조용한 카페", 5.0)],
        };

        let profile = snapshot.into_profile();

        assert_eq!(profile.user(), "Yuna");
        assert_eq!(profile.style_keywords(), ["cozy"]);
        assert_eq!(profile.review_sample().len(), 1);
        assert_eq!(profile.vocabulary_count("조용한"), 1);
    }
}
