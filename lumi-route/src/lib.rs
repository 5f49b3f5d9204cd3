//! Weather-aware reordering of itineraries.
//!
//! Bad weather (rain, snow, clouds) moves indoor places to the front of the
//! itinerary; good weather moves outdoor places to the front. The reorder is
//! a stable partition: within each placement class the original visit order
//! is preserved, and the input itinerary is left untouched.
//!
//! # Examples
//!
//! ```
//! use lumi_core::{Itinerary, Place, Weather};
//! use lumi_route::optimise;
//!
//! let itinerary = Itinerary::from_places(vec![
//!     Place::new("park-1", "Han River Park").with_category("park"),
//!     Place::new("museum-1", "Folk Museum").with_category("museum"),
//! ]);
//!
//! let wet_day = optimise(&itinerary, Weather::Rain);
//! assert_eq!(wet_day.places().first().map(|p| p.id.as_str()), Some("museum-1"));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::cmp::Ordering;

use lumi_core::{Itinerary, Place, Weather};

/// Categories treated as indoor when reordering for weather.
pub const INDOOR_CATEGORIES: [&str; 4] = ["restaurant", "cafe", "museum", "shopping_mall"];

/// Whether a place counts as indoor or outdoor for weather planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// The place shelters visitors from the weather.
    Indoor,
    /// The place is exposed to the weather.
    Outdoor,
}

impl Placement {
    /// Classify a place by its category.
    ///
    /// Only exact matches against [`INDOOR_CATEGORIES`] count as indoor;
    /// every other category, including an empty one, is outdoor.
    #[must_use]
    pub fn of(place: &Place) -> Self {
        if INDOOR_CATEGORIES.contains(&place.category.as_str()) {
            Self::Indoor
        } else {
            Self::Outdoor
        }
    }

    /// `true` for [`Placement::Indoor`].
    #[must_use]
    pub const fn is_indoor(self) -> bool {
        matches!(self, Self::Indoor)
    }
}

/// Reorder an itinerary for the forecast weather.
///
/// Bad weather ([`Weather::is_bad`]) brings indoor places forward; good
/// weather brings outdoor places forward. The sort is stable, so places in
/// the same class keep their relative visit order. The result is a fresh
/// itinerary; reordering never fails.
#[must_use]
pub fn optimise(itinerary: &Itinerary, weather: Weather) -> Itinerary {
    let mut places: Vec<Place> = itinerary.places().to_vec();
    places.sort_by(|lhs, rhs| placement_order(lhs, rhs, weather));
    log::debug!("reordered {} places for {weather} weather", places.len());
    Itinerary::from_places(places)
}

fn placement_order(lhs: &Place, rhs: &Place, weather: Weather) -> Ordering {
    let lhs_indoor = Placement::of(lhs).is_indoor();
    let rhs_indoor = Placement::of(rhs).is_indoor();
    if lhs_indoor == rhs_indoor {
        return Ordering::Equal;
    }
    if lhs_indoor == weather.is_bad() {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}
