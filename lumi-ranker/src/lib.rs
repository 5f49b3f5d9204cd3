//! Taste-based ranking of candidate places.
//!
//! The ranker scores each candidate against a [`TasteProfile`], attaches a
//! locale-flavoured tip, and returns the candidates sorted by descending
//! score. Scoring is additive over four signals (tag matches, review
//! keywords, vocabulary overlap, and the aggregate rating); see
//! [`SignalWeights`] for the weighting and [`TipCatalogue`] for tip
//! selection. Ranking is total: it accepts any candidate set and never
//! fails.
//!
//! # Examples
//!
//! ```
//! use lumi_core::{Place, TasteProfile};
//! use lumi_ranker::PlaceRanker;
//!
//! let profile = TasteProfile::new("Yuna", vec!["cozy".to_owned()], Vec::new());
//! let places = vec![
//!     Place::new("mall-1", "Grand Mall").with_rating(5.0),
//!     Place::new("cafe-1", "Dansang")
//!         .with_tags(["cozy cafe"])
//!         .with_rating(4.0),
//! ];
//!
//! let ranked = PlaceRanker::new().rank(places, &profile);
//! assert_eq!(ranked.first().map(|r| r.place.id.as_str()), Some("cafe-1"));
//! assert_eq!(ranked.first().map(|r| r.taste_score), Some(5.0));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::cmp::Ordering;

use lumi_core::{Place, RankedPlace, Scorer, TasteProfile};

mod persona;
mod scoring;
mod tips;

pub use persona::{Persona, classify_persona};
pub use scoring::{SignalWeights, TasteScorer};
pub use tips::{Locale, TipCatalogue, TipRule};

/// Ranks candidate places against a visitor's taste profile.
///
/// The ranker pairs a [`Scorer`] with a [`TipCatalogue`]; both default to
/// the engine's built-in taste model with Korean tips.
#[derive(Debug, Clone)]
pub struct PlaceRanker<S = TasteScorer>
where
    S: Scorer,
{
    scorer: S,
    tips: TipCatalogue,
}

impl PlaceRanker<TasteScorer> {
    /// Construct a ranker with default weights and Korean tips.
    #[must_use]
    pub fn new() -> Self {
        Self::with_locale(Locale::Korean)
    }

    /// Construct a ranker with default weights and the built-in catalogue
    /// for `locale`.
    #[must_use]
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            scorer: TasteScorer::default(),
            tips: TipCatalogue::for_locale(locale),
        }
    }
}

impl Default for PlaceRanker<TasteScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> PlaceRanker<S>
where
    S: Scorer,
{
    /// Construct a ranker from an explicit scorer and tip catalogue.
    #[must_use]
    pub const fn with_scorer(scorer: S, tips: TipCatalogue) -> Self {
        Self { scorer, tips }
    }

    /// The tip catalogue in effect.
    #[must_use]
    pub const fn tips(&self) -> &TipCatalogue {
        &self.tips
    }

    /// Rank candidates by descending taste score.
    ///
    /// Every input place appears exactly once in the result; equal scores
    /// keep the input order. Scores are finalised to one decimal place
    /// before sorting and tip selection, so the order matches the
    /// serialised output.
    #[must_use]
    pub fn rank(&self, places: Vec<Place>, profile: &TasteProfile) -> Vec<RankedPlace> {
        let mut ranked: Vec<RankedPlace> = places
            .into_iter()
            .map(|place| self.annotate(place, profile))
            .collect();
        ranked.sort_by(|lhs, rhs| {
            rhs.taste_score
                .partial_cmp(&lhs.taste_score)
                .unwrap_or(Ordering::Equal)
        });
        log::debug!("ranked {} places for {}", ranked.len(), profile.user());
        ranked
    }

    fn annotate(&self, place: Place, profile: &TasteProfile) -> RankedPlace {
        let taste_score = S::finalise(self.scorer.score(&place, profile));
        let tip = self.tips.tip_for(&place, taste_score, profile.user());
        RankedPlace {
            place,
            taste_score,
            tip,
        }
    }
}
