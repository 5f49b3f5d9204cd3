//! Score places against a visitor's taste profile.
//!
//! The `Scorer` trait assigns a taste score to a [`Place`](crate::Place)
//! given the visitor's [`TasteProfile`](crate::TasteProfile).

use crate::{Place, TasteProfile};

/// Calculate a taste score for a place.
///
/// Higher scores indicate a better match between the place and the
/// visitor's recorded taste. Implementations must be thread-safe
/// (`Send` + `Sync`) so ranking can run across threads, and must be pure
/// functions of their arguments: no hidden state, no randomness.
///
/// Raw scores are unbounded sums. Callers present scores to users through
/// [`Scorer::finalise`], which quantises to one decimal place.
///
/// # Examples
///
/// ```rust
/// use lumi_core::{Place, Scorer, TasteProfile};
///
/// struct UnitScorer;
///
/// impl Scorer for UnitScorer {
///     fn score(&self, _place: &Place, _profile: &TasteProfile) -> f64 {
///         1.0
///     }
/// }
///
/// let place = Place::new("p1", "Museum");
/// let profile = TasteProfile::default();
/// assert_eq!(UnitScorer.score(&place, &profile), 1.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a raw score for `place` according to `profile`.
    fn score(&self, place: &Place, profile: &TasteProfile) -> f64;

    /// Quantise a raw score to one decimal place.
    ///
    /// Rounds half away from zero, which matches half-up for the
    /// non-negative sums the engine produces. Non-finite input collapses
    /// to `0.0`.
    fn finalise(score: f64) -> f64 {
        if !score.is_finite() {
            return 0.0;
        }
        (score * 10.0).round() / 10.0
    }
}
