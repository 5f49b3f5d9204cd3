//! Test-only fixtures shared by unit and behaviour tests.

use crate::{Place, ProfileReview, Review, Scorer, TasteProfile};

/// Build a place with a deterministic name derived from its id.
pub fn sample_place(id: &str) -> Place {
    Place::new(id, format!("Place {id}"))
}

/// Build a taste profile from keyword and review-text slices.
///
/// Reviews are given a flat 4.0 rating; the texts feed the vocabulary as
/// usual.
pub fn profile_from_texts(user: &str, keywords: &[&str], texts: &[&str]) -> TasteProfile {
    TasteProfile::new(
        user,
        keywords.iter().map(|&k| k.to_owned()).collect(),
        texts
            .iter()
            .map(|&text| ProfileReview::new(text, 4.0))
            .collect(),
    )
}

/// Attach a single anonymous review to a place.
pub fn with_review_text(place: Place, text: &str) -> Place {
    place.with_review(Review::new("visitor", text, 4.0))
}

/// Scorer returning a constant `1.0` for every place.
#[derive(Debug, Copy, Clone, Default)]
pub struct UnitScorer;

impl Scorer for UnitScorer {
    fn score(&self, _place: &Place, _profile: &TasteProfile) -> f64 {
        1.0
    }
}
