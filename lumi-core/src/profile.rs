//! Taste profiles: one visitor's style keywords and review history.
//!
//! A profile is constructed once from a persisted snapshot and read-only
//! thereafter. Construction normalises the style keywords and derives the
//! word-frequency vocabulary; ranking never mutates the profile, so a shared
//! reference is safe across threads.

use std::collections::BTreeMap;

/// A historical review kept in the profile's sample.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileReview {
    /// Free-form review text.
    pub text: String,
    /// Star rating the visitor awarded.
    pub rating: f64,
}

impl ProfileReview {
    /// Construct a review from its parts.
    pub fn new(text: impl Into<String>, rating: f64) -> Self {
        Self {
            text: text.into(),
            rating,
        }
    }
}

/// One visitor's taste dataset: style keywords, a bounded review sample, and
/// the vocabulary derived from it.
///
/// # Examples
/// ```
/// use lumi_core::{ProfileReview, TasteProfile};
///
/// let profile = TasteProfile::new(
///     "Yuna",
///     vec![" Cozy ".to_owned(), "modern".to_owned()],
///     vec![ProfileReview::new("Quiet cozy place", 5.0)],
/// );
/// assert_eq!(profile.style_keywords(), ["cozy", "modern"]);
/// assert_eq!(profile.vocabulary_count("cozy"), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TasteProfile {
    user: String,
    style_keywords: Vec<String>,
    review_sample: Vec<ProfileReview>,
    vocabulary: BTreeMap<String, u32>,
}

impl TasteProfile {
    /// Number of leading sample reviews that feed the vocabulary.
    pub const VOCABULARY_REVIEW_CAP: usize = 1000;
    /// Minimum character count for a token to enter the vocabulary.
    pub const MIN_TOKEN_CHARS: usize = 3;

    /// Construct a profile, normalising keywords and deriving the vocabulary.
    ///
    /// Keywords are trimmed, lower-cased, and dropped when empty; their order
    /// is preserved. The vocabulary counts whitespace-separated, lower-cased
    /// tokens of at least [`Self::MIN_TOKEN_CHARS`] characters drawn from the
    /// first [`Self::VOCABULARY_REVIEW_CAP`] reviews. The full sample is
    /// retained regardless of the cap.
    pub fn new(
        user: impl Into<String>,
        style_keywords: Vec<String>,
        review_sample: Vec<ProfileReview>,
    ) -> Self {
        let style_keywords: Vec<String> = style_keywords
            .iter()
            .map(|keyword| keyword.trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .collect();
        let vocabulary = derive_vocabulary(&review_sample);
        Self {
            user: user.into(),
            style_keywords,
            review_sample,
            vocabulary,
        }
    }

    /// Display name of the profile owner.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Normalised style keywords in their original order.
    pub fn style_keywords(&self) -> &[String] {
        &self.style_keywords
    }

    /// The retained review sample.
    pub fn review_sample(&self) -> &[ProfileReview] {
        &self.review_sample
    }

    /// Derived word frequencies in deterministic (sorted) order.
    pub fn vocabulary(&self) -> &BTreeMap<String, u32> {
        &self.vocabulary
    }

    /// Occurrence count for a vocabulary word, zero when absent.
    ///
    /// # Examples
    /// ```
    /// use lumi_core::{ProfileReview, TasteProfile};
    ///
    /// let profile = TasteProfile::new(
    ///     "Yuna",
    ///     Vec::new(),
    ///     vec![ProfileReview::new("cozy cozy vibes", 4.0)],
    /// );
    /// assert_eq!(profile.vocabulary_count("cozy"), 2);
    /// assert_eq!(profile.vocabulary_count("sleek"), 0);
    /// ```
    pub fn vocabulary_count(&self, word: &str) -> u32 {
        self.vocabulary.get(word).copied().unwrap_or(0)
    }
}

fn derive_vocabulary(sample: &[ProfileReview]) -> BTreeMap<String, u32> {
    let mut vocabulary = BTreeMap::new();
    for review in sample.iter().take(TasteProfile::VOCABULARY_REVIEW_CAP) {
        for token in tokenise(&review.text) {
            *vocabulary.entry(token).or_insert(0) += 1;
        }
    }
    vocabulary
}

fn tokenise(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(str::to_lowercase)
        .filter(|token| token.chars().count() >= TasteProfile::MIN_TOKEN_CHARS)
}
