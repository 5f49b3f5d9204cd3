//! Travel persona classification from the review sample.

use lumi_core::TasteProfile;

const MODERN_TRIGGERS: [&str; 3] = ["modern", "깔끔", "정갈"];
const LOCAL_TRIGGERS: [&str; 3] = ["로컬", "전통", "숨은"];
const COSY_TRIGGERS: [&str; 3] = ["cozy", "조용", "여유"];

/// Heuristic travel-style archetype derived from review history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Persona {
    /// Drawn to neat, polished, contemporary places.
    ModernHunter,
    /// Seeks out traditional and hidden local spots.
    LocalExplorer,
    /// Prefers calm places and unhurried time.
    RelaxedHealer,
}

impl Persona {
    /// Stable lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ModernHunter => "modern-hunter",
            Self::LocalExplorer => "local-explorer",
            Self::RelaxedHealer => "relaxed-healer",
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify the profile owner's travel persona.
///
/// Counts sample reviews mentioning each trigger family. Local mentions win
/// ties against both other families, and modern mentions win ties against
/// cosy ones, so an empty sample classifies as [`Persona::LocalExplorer`].
#[must_use]
pub fn classify_persona(profile: &TasteProfile) -> Persona {
    let modern = family_mentions(profile, &MODERN_TRIGGERS);
    let local = family_mentions(profile, &LOCAL_TRIGGERS);
    let cosy = family_mentions(profile, &COSY_TRIGGERS);
    if local >= modern && local >= cosy {
        Persona::LocalExplorer
    } else if modern >= cosy {
        Persona::ModernHunter
    } else {
        Persona::RelaxedHealer
    }
}

fn family_mentions(profile: &TasteProfile, triggers: &[&str]) -> usize {
    profile
        .review_sample()
        .iter()
        .filter(|review| {
            let text = review.text.to_lowercase();
            triggers.iter().any(|trigger| text.contains(trigger))
        })
        .count()
}
