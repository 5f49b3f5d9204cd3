//! Facade crate for the Lumi taste-ranking engine.
//!
//! This crate re-exports the core domain types and exposes the ranking,
//! routing, and profile-loading components behind feature flags.

#![forbid(unsafe_code)]

pub use lumi_core::{
    Itinerary, Place, ProfileReview, RankedPlace, Review, Scorer, TasteProfile, Weather,
};

#[cfg(feature = "ranker")]
pub use lumi_ranker::{
    Locale, Persona, PlaceRanker, SignalWeights, TasteScorer, TipCatalogue, TipRule,
    classify_persona,
};

#[cfg(feature = "route")]
pub use lumi_route::{INDOOR_CATEGORIES, Placement, optimise};

#[cfg(feature = "profile")]
pub use lumi_profile::{
    ExtractError, ProfileUnavailable, SnapshotReview, TasteSnapshot, extract_snapshot,
    extract_to_file, load_taste_profile,
};
