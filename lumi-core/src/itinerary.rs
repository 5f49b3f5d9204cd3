//! Itineraries: ordered, id-deduplicated sequences of saved places.
//!
//! The container enforces one entry per place id with the first occurrence
//! winning. Order is caller-controlled; only route optimisation or wholesale
//! replacement changes it. The serialised form is a plain JSON array of
//! places, with deduplication re-applied on deserialisation.

use crate::Place;

/// An ordered sequence of places with unique ids.
///
/// # Examples
/// ```
/// use lumi_core::{Itinerary, Place};
///
/// let mut itinerary = Itinerary::new();
/// assert!(itinerary.add(Place::new("p1", "Museum")));
/// assert!(!itinerary.add(Place::new("p1", "Museum again")));
/// assert_eq!(itinerary.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<Place>", into = "Vec<Place>")
)]
pub struct Itinerary {
    places: Vec<Place>,
}

impl Itinerary {
    /// Construct an empty itinerary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an itinerary from a sequence, keeping the first place per id.
    ///
    /// # Examples
    /// ```
    /// use lumi_core::{Itinerary, Place};
    ///
    /// let itinerary = Itinerary::from_places(vec![
    ///     Place::new("p1", "First"),
    ///     Place::new("p2", "Second"),
    ///     Place::new("p1", "Duplicate"),
    /// ]);
    /// assert_eq!(itinerary.len(), 2);
    /// assert_eq!(itinerary.places()[0].name, "First");
    /// ```
    pub fn from_places(places: Vec<Place>) -> Self {
        let mut itinerary = Self::new();
        for place in places {
            itinerary.add(place);
        }
        itinerary
    }

    /// Append a place unless its id is already present.
    ///
    /// Returns `false` and leaves the itinerary unchanged for a duplicate id.
    pub fn add(&mut self, place: Place) -> bool {
        if self.contains(&place.id) {
            return false;
        }
        self.places.push(place);
        true
    }

    /// Remove and return the place with the given id, if present.
    pub fn remove(&mut self, id: &str) -> Option<Place> {
        let index = self.places.iter().position(|place| place.id == id)?;
        Some(self.places.remove(index))
    }

    /// Report whether a place with the given id is present.
    pub fn contains(&self, id: &str) -> bool {
        self.places.iter().any(|place| place.id == id)
    }

    /// The places in itinerary order.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Number of places held.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Report whether the itinerary is empty.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Consume the itinerary and return the ordered places.
    pub fn into_places(self) -> Vec<Place> {
        self.places
    }
}

impl From<Vec<Place>> for Itinerary {
    fn from(places: Vec<Place>) -> Self {
        Self::from_places(places)
    }
}

impl From<Itinerary> for Vec<Place> {
    fn from(itinerary: Itinerary) -> Self {
        itinerary.places
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: &str) -> Place {
        Place::new(id, format!("Place {id}"))
    }

    #[test]
    fn add_rejects_duplicate_ids() {
        let mut itinerary = Itinerary::new();
        assert!(itinerary.add(place("a")));
        assert!(!itinerary.add(place("a")));
        assert_eq!(itinerary.len(), 1);
    }

    #[test]
    fn from_places_keeps_first_occurrence() {
        let first = Place::new("a", "keep");
        let shadow = Place::new("a", "drop");
        let itinerary = Itinerary::from_places(vec![first.clone(), place("b"), shadow]);
        assert_eq!(itinerary.places()[0], first);
        assert_eq!(itinerary.len(), 2);
    }

    #[test]
    fn remove_returns_the_place() {
        let mut itinerary = Itinerary::from_places(vec![place("a"), place("b")]);
        let removed = itinerary.remove("a");
        assert_eq!(removed.map(|p| p.id), Some("a".to_owned()));
        assert!(!itinerary.contains("a"));
        assert!(itinerary.contains("b"));
    }

    #[test]
    fn remove_missing_id_is_none() {
        let mut itinerary = Itinerary::new();
        assert!(itinerary.remove("ghost").is_none());
    }
}
