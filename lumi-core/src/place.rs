//! Places returned by the search collaborator and their ranked form.
//!
//! A [`Place`] mirrors the upstream search payload: identity plus free-form
//! descriptive fields. Every descriptive field is defaultable so partial
//! payloads still deserialise; only `id` is required.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single visitor review attached to a place.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Review {
    /// Display name of the reviewer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub author: String,
    /// Free-form review text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: String,
    /// Star rating awarded by the reviewer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: f64,
}

impl Review {
    /// Construct a review from its parts.
    ///
    /// # Examples
    /// ```
    /// use lumi_core::Review;
    ///
    /// let review = Review::new("Mina", "Cozy spot with friendly staff", 5.0);
    /// assert_eq!(review.rating, 5.0);
    /// ```
    pub fn new(author: impl Into<String>, text: impl Into<String>, rating: f64) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            rating,
        }
    }
}

/// A candidate place as returned by the search collaborator.
///
/// # Examples
/// ```
/// use lumi_core::Place;
///
/// let place = Place::new("p1", "Dansang")
///     .with_category("cafe")
///     .with_tags(["cozy cafe", "quiet"])
///     .with_rating(4.5);
/// assert_eq!(place.category, "cafe");
/// assert_eq!(place.tags.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Place {
    /// Opaque identifier, unique within a candidate set.
    pub id: String,
    /// Display name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Primary taxonomy category, e.g. `cafe` or `tourist_attraction`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: String,
    /// Short free-text labels describing the place.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    /// Street address.
    #[cfg_attr(feature = "serde", serde(default))]
    pub address: String,
    /// Contact phone number.
    #[cfg_attr(feature = "serde", serde(default))]
    pub phone: String,
    /// Opening hours description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hours: String,
    /// Aggregate star rating in `0.0..=5.0`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: f64,
    /// Visitor reviews.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reviews: Vec<Review>,
}

impl Place {
    /// Construct a place with only identity fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the category while returning `self` for chaining.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the tags while returning `self` for chaining.
    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the aggregate rating while returning `self` for chaining.
    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Append a review while returning `self` for chaining.
    #[must_use]
    pub fn with_review(mut self, review: Review) -> Self {
        self.reviews.push(review);
        self
    }

    /// Concatenate all review texts into one lower-cased blob.
    ///
    /// The blob joins texts with a single space and is the haystack for
    /// keyword and vocabulary substring matching.
    ///
    /// # Examples
    /// ```
    /// use lumi_core::{Place, Review};
    ///
    /// let place = Place::new("p1", "Dansang")
    ///     .with_review(Review::new("Mina", "Quiet and COZY", 5.0))
    ///     .with_review(Review::new("Jun", "Friendly staff", 4.0));
    /// assert_eq!(place.review_blob(), "quiet and cozy friendly staff");
    /// ```
    pub fn review_blob(&self) -> String {
        self.reviews
            .iter()
            .map(|review| review.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

/// A place annotated with its taste score and generated tip.
///
/// Produced by ranking; the wrapped place is unchanged from the input. The
/// serialised form flattens the place fields alongside `taste_score` and
/// `tip`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RankedPlace {
    /// The candidate place as supplied to the ranker.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub place: Place,
    /// Taste score rounded to one decimal place.
    pub taste_score: f64,
    /// Persona-flavoured recommendation sentence.
    pub tip: String,
}
