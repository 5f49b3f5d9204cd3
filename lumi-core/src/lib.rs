//! Core domain types for the Lumi taste-ranking engine.
//!
//! The crate models the data that flows between the engine's components: the
//! places returned by a search collaborator, the visitor's immutable
//! [`TasteProfile`], the [`Itinerary`] of saved places, and the [`Weather`]
//! readout used for route sequencing. The [`Scorer`] trait is the seam
//! between these types and the ranking implementations.
//!
//! All types are plain in-memory values. Construction normalises input where
//! the engine relies on it (keyword casing, vocabulary derivation, itinerary
//! deduplication); nothing here performs IO.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod itinerary;
mod place;
mod profile;
mod scorer;
mod weather;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use itinerary::Itinerary;
pub use place::{Place, RankedPlace, Review};
pub use profile::{ProfileReview, TasteProfile};
pub use scorer::Scorer;
pub use weather::Weather;
