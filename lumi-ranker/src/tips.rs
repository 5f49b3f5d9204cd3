//! Locale-keyed tip catalogues: trigger phrases and templates.
//!
//! A catalogue is plain data so deployments can serialise, edit, and reload
//! the voice without code changes. The built-in Korean catalogue carries the
//! engine's original templates; the English catalogue mirrors its structure.

use lumi_core::Place;
use serde::{Deserialize, Serialize};

/// Selector for a built-in tip catalogue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// Korean tips, the engine's original voice.
    #[default]
    Korean,
    /// English tips.
    English,
}

impl Locale {
    /// Short identifier, `ko` or `en`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Korean => "ko",
            Self::English => "en",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ko" | "korean" => Ok(Self::Korean),
            "en" | "english" => Ok(Self::English),
            _ => Err(format!("unknown locale '{s}'")),
        }
    }
}

/// One trigger family and the template it selects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipRule {
    /// Phrases that select this rule when found in the review blob.
    pub triggers: Vec<String>,
    /// Tip template; `{user}` expands to the profile owner's name.
    pub template: String,
}

impl TipRule {
    /// Construct a rule from trigger phrases and a template.
    #[must_use]
    pub fn new<I, T>(triggers: I, template: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            triggers: triggers.into_iter().map(Into::into).collect(),
            template: template.into(),
        }
    }

    fn matches(&self, blob: &str) -> bool {
        self.triggers
            .iter()
            .any(|trigger| blob.contains(trigger.as_str()))
    }
}

/// Ordered tip rules with a high-affinity threshold and a fallback.
///
/// # Examples
/// ```
/// use lumi_core::Place;
/// use lumi_ranker::TipCatalogue;
///
/// let tips = TipCatalogue::english();
/// let tip = tips.tip_for(&Place::new("p1", "Nook"), 3.0, "Yuna");
/// assert!(tip.contains("Yuna"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipCatalogue {
    /// Score above which the high-affinity template is selected.
    pub threshold: f64,
    /// Template for scores above the threshold.
    pub high_affinity: String,
    /// Trigger rules, evaluated in order; the first match wins.
    pub rules: Vec<TipRule>,
    /// Template used when no rule matches.
    pub fallback: String,
}

impl TipCatalogue {
    /// Score above which the built-in catalogues switch to the
    /// high-affinity template.
    pub const DEFAULT_THRESHOLD: f64 = 20.0;

    /// The built-in Korean catalogue.
    #[must_use]
    pub fn korean() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            high_affinity: "완전 {user}님 스타일! 평소 좋아하시는 정갈하고 깔끔한 분위기가 가득해요. ✨"
                .to_owned(),
            rules: vec![
                TipRule::new(
                    ["친절", "서비스"],
                    "친절한 서비스로 유명한 곳이에요. {user}님이 중요하게 생각하시는 부분이죠! 😊",
                ),
                TipRule::new(
                    ["조용", "여유"],
                    "조용하게 시간을 보내기 좋은 곳이에요. 혼자만의 시간을 선호하시는 취향에 딱! 🍃",
                ),
                TipRule::new(
                    ["힙한", "감성"],
                    "요즘 힙한 감성이 가득한 곳이에요. {user}님의 세련된 감각과 잘 어울려요! 💖",
                ),
            ],
            fallback: "여기는 {user}님이 좋아하실 만한 분위기예요!".to_owned(),
        }
    }

    /// The built-in English catalogue.
    #[must_use]
    pub fn english() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            high_affinity: "Totally {user}'s style! It has the neat, polished atmosphere you always go for. ✨"
                .to_owned(),
            rules: vec![
                TipRule::new(
                    ["friendly", "service"],
                    "This place is known for its friendly service, something {user} really values! 😊",
                ),
                TipRule::new(
                    ["quiet", "relaxed"],
                    "A lovely spot for unhurried time on your own, right up {user}'s street. 🍃",
                ),
                TipRule::new(
                    ["hip", "trendy"],
                    "Full of the trendy mood of the moment, a great match for {user}'s refined taste! 💖",
                ),
            ],
            fallback: "This place has an atmosphere {user} is sure to love!".to_owned(),
        }
    }

    /// The built-in catalogue for `locale`.
    #[must_use]
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Korean => Self::korean(),
            Locale::English => Self::english(),
        }
    }

    /// Choose and render the tip for a scored place.
    ///
    /// Selection cascades: scores above the threshold take the
    /// high-affinity template; otherwise the first rule with a trigger
    /// present in the place's review blob wins; otherwise the fallback.
    /// `{user}` in the chosen template expands to `user`.
    #[must_use]
    pub fn tip_for(&self, place: &Place, score: f64, user: &str) -> String {
        if score > self.threshold {
            return render(&self.high_affinity, user);
        }
        let blob = place.review_blob();
        self.rules.iter().find(|rule| rule.matches(&blob)).map_or_else(
            || render(&self.fallback, user),
            |rule| render(&rule.template, user),
        )
    }
}

fn render(template: &str, user: &str) -> String {
    template.replace("{user}", user)
}

#[cfg(test)]
mod tests {
    use lumi_core::Place;
    use lumi_core::test_support::with_review_text;
    use rstest::rstest;

    use super::{Locale, TipCatalogue, TipRule};

    fn place_with_review(text: &str) -> Place {
        with_review_text(Place::new("p1", "Dansang"), text)
    }

    #[rstest]
    fn high_affinity_requires_strictly_more_than_threshold() {
        let tips = TipCatalogue::korean();
        let place = Place::new("p1", "Dansang");

        assert_eq!(tips.tip_for(&place, 20.0, "Yuna"), "여기는 Yuna님이 좋아하실 만한 분위기예요!");
        assert!(tips.tip_for(&place, 20.1, "Yuna").starts_with("완전 Yuna님 스타일!"));
    }

    #[rstest]
    fn earlier_rules_shadow_later_ones() {
        let tips = TipCatalogue::korean();
        let place = place_with_review("친절하고 조용한 곳");

        let tip = tips.tip_for(&place, 5.0, "Yuna");
        assert!(tip.starts_with("친절한 서비스"), "expected the service tip, got {tip}");
    }

    #[rstest]
    #[case("여유로운 오후", "조용하게")]
    #[case("감성 넘치는 인테리어", "요즘 힙한")]
    fn triggers_select_their_rule(#[case] review: &str, #[case] prefix: &str) {
        let tips = TipCatalogue::korean();
        let place = place_with_review(review);

        let tip = tips.tip_for(&place, 5.0, "Yuna");
        assert!(tip.starts_with(prefix), "expected prefix {prefix}, got {tip}");
    }

    #[rstest]
    fn english_catalogue_matches_english_reviews() {
        let tips = TipCatalogue::english();
        let place = place_with_review("Friendly staff and fast service");

        let tip = tips.tip_for(&place, 5.0, "Yuna");
        assert!(tip.contains("friendly service"), "got {tip}");
    }

    #[rstest]
    fn rule_matching_uses_the_lowercased_blob() {
        let tips = TipCatalogue::english();
        let place = place_with_review("QUIET little courtyard");

        let tip = tips.tip_for(&place, 5.0, "Yuna");
        assert!(tip.contains("unhurried"), "got {tip}");
    }

    #[rstest]
    fn catalogue_round_trips_through_json() {
        let tips = TipCatalogue {
            threshold: 10.0,
            high_affinity: "top pick for {user}".to_owned(),
            rules: vec![TipRule::new(["calm"], "calm spot for {user}")],
            fallback: "worth a look, {user}".to_owned(),
        };

        let json = serde_json::to_string(&tips).expect("serialise catalogue");
        let parsed: TipCatalogue = serde_json::from_str(&json).expect("parse catalogue");
        assert_eq!(parsed, tips);
    }

    #[rstest]
    #[case("ko", Locale::Korean)]
    #[case("KO", Locale::Korean)]
    #[case("korean", Locale::Korean)]
    #[case("en", Locale::English)]
    #[case("English", Locale::English)]
    fn locale_parses_known_identifiers(#[case] input: &str, #[case] expected: Locale) {
        assert_eq!(input.parse::<Locale>(), Ok(expected));
    }

    #[rstest]
    fn locale_rejects_unknown_identifiers() {
        let err = "fr".parse::<Locale>().expect_err("unknown locale");
        assert!(err.contains("fr"));
    }
}
