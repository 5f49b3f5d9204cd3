//! Additive taste scoring over tags, review text, vocabulary, and rating.

use lumi_core::{Place, Scorer, TasteProfile};

/// Relative weighting of the four taste signals.
///
/// The defaults reproduce the engine's original tuning; callers wanting a
/// different balance construct a [`TasteScorer`] from adjusted weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalWeights {
    /// Points per matching tag and keyword pair.
    pub tag_match: f64,
    /// Points per style keyword found in the review blob.
    pub review_keyword: f64,
    /// Points per recorded occurrence of a vocabulary word.
    pub vocabulary_step: f64,
    /// Ceiling on one vocabulary word's contribution.
    pub vocabulary_cap: f64,
    /// Multiplier applied to the place's aggregate rating.
    pub rating_factor: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            tag_match: 3.0,
            review_keyword: 2.0,
            vocabulary_step: 0.1,
            vocabulary_cap: 1.0,
            rating_factor: 0.5,
        }
    }
}

/// The engine's built-in additive taste model.
///
/// A place scores against a profile on four signals:
///
/// - each tag and style-keyword pair where either side contains the other,
///   case-insensitively, earns [`SignalWeights::tag_match`];
/// - each style keyword found in the place's review blob earns
///   [`SignalWeights::review_keyword`], once per keyword;
/// - each vocabulary word found in the blob earns its occurrence count
///   times [`SignalWeights::vocabulary_step`], capped at
///   [`SignalWeights::vocabulary_cap`];
/// - the aggregate rating scaled by [`SignalWeights::rating_factor`].
///
/// The raw sum is unbounded; [`Scorer::finalise`] quantises it for
/// presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TasteScorer {
    weights: SignalWeights,
}

impl TasteScorer {
    /// Construct a scorer with explicit signal weights.
    #[must_use]
    pub const fn new(weights: SignalWeights) -> Self {
        Self { weights }
    }

    /// The weights in effect.
    #[must_use]
    pub const fn weights(&self) -> SignalWeights {
        self.weights
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "signal accumulation is float maths"
    )]
    fn tag_component(&self, place: &Place, profile: &TasteProfile) -> f64 {
        let mut total = 0.0_f64;
        for tag in &place.tags {
            let lowered = tag.to_lowercase();
            for keyword in profile.style_keywords() {
                if lowered.contains(keyword.as_str()) || keyword.contains(lowered.as_str()) {
                    total += self.weights.tag_match;
                }
            }
        }
        total
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "signal accumulation is float maths"
    )]
    fn keyword_component(&self, blob: &str, profile: &TasteProfile) -> f64 {
        let mut total = 0.0_f64;
        for keyword in profile.style_keywords() {
            if blob.contains(keyword.as_str()) {
                total += self.weights.review_keyword;
            }
        }
        total
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "signal accumulation is float maths"
    )]
    fn vocabulary_component(&self, blob: &str, profile: &TasteProfile) -> f64 {
        let mut total = 0.0_f64;
        for (word, count) in profile.vocabulary() {
            if blob.contains(word.as_str()) {
                total += (f64::from(*count) * self.weights.vocabulary_step)
                    .min(self.weights.vocabulary_cap);
            }
        }
        total
    }
}

impl Scorer for TasteScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "the taste score is an additive float sum"
    )]
    fn score(&self, place: &Place, profile: &TasteProfile) -> f64 {
        let blob = place.review_blob();
        self.tag_component(place, profile)
            + self.keyword_component(&blob, profile)
            + self.vocabulary_component(&blob, profile)
            + place.rating * self.weights.rating_factor
    }
}
