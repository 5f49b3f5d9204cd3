//! Behaviour tests verifying taste profile construction.

use lumi_core::{ProfileReview, TasteProfile};
use rstest::rstest;

fn review(text: &str) -> ProfileReview {
    ProfileReview::new(text, 4.0)
}

#[rstest]
#[case(&["Cozy", " MODERN "], &["cozy", "modern"])]
#[case(&["", "  "], &[])]
#[case(&["친절", "깔끔"], &["친절", "깔끔"])]
#[case(&["cozy", "cozy"], &["cozy", "cozy"])]
fn keyword_normalisation(#[case] raw: &[&str], #[case] expected: &[&str]) {
    let profile = TasteProfile::new(
        "u",
        raw.iter().map(|&k| k.to_owned()).collect(),
        Vec::new(),
    );
    assert_eq!(profile.style_keywords(), expected);
}

#[rstest]
#[case("Nice cozy place", "cozy", 1)]
#[case("cozy Cozy COZY", "cozy", 3)]
#[case("of it an", "of", 0)]
#[case("깔끔하고 깔끔한", "깔끔하고", 1)]
fn vocabulary_derivation(#[case] text: &str, #[case] word: &str, #[case] expected: u32) {
    let profile = TasteProfile::new("u", Vec::new(), vec![review(text)]);
    assert_eq!(profile.vocabulary_count(word), expected);
}

#[test]
fn vocabulary_iterates_in_sorted_order() {
    let profile = TasteProfile::new(
        "u",
        Vec::new(),
        vec![review("zebra apple mango"), review("apple")],
    );
    let words: Vec<&str> = profile.vocabulary().keys().map(String::as_str).collect();
    assert_eq!(words, ["apple", "mango", "zebra"]);
    assert_eq!(profile.vocabulary_count("apple"), 2);
}

#[test]
fn korean_two_character_tokens_are_dropped() {
    // Token length is measured in characters, not bytes, so two-syllable
    // Korean words fall under the minimum despite their UTF-8 width.
    let profile = TasteProfile::new("u", Vec::new(), vec![review("좋다 괜찮은 정말좋아요")]);
    assert_eq!(profile.vocabulary_count("좋다"), 0);
    assert_eq!(profile.vocabulary_count("괜찮은"), 1);
    assert_eq!(profile.vocabulary_count("정말좋아요"), 1);
}

#[test]
fn sample_is_retained_beyond_the_vocabulary_cap() {
    let sample: Vec<ProfileReview> = (0..=TasteProfile::VOCABULARY_REVIEW_CAP)
        .map(|i| ProfileReview::new(format!("visit number {i}"), 5.0))
        .collect();
    let profile = TasteProfile::new("u", Vec::new(), sample);
    assert_eq!(
        profile.review_sample().len(),
        TasteProfile::VOCABULARY_REVIEW_CAP + 1
    );
    let visits = profile.vocabulary_count("visit");
    assert_eq!(
        visits,
        u32::try_from(TasteProfile::VOCABULARY_REVIEW_CAP).expect("cap fits u32")
    );
}
