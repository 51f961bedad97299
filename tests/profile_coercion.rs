//! End-to-end coercion and validation: raw JSON in, normalized profile
//! out, malformed frameworks degraded rather than fatal.

use persona_mind::profile::validate;
use persona_mind::profile::{AttachmentStyle, LoveLanguage, Mbti};
use persona_mind::{Analyzer, Profile};
use serde_json::json;

#[test]
fn test_big_five_clamping_round_trip() {
    let profile: Profile = serde_json::from_value(json!({
        "bigFive": {
            "openness": 150,
            "conscientiousness": -10,
            "extraversion": 70,
            "agreeableness": 50,
            "neuroticism": 40
        }
    }))
    .unwrap();
    let scores = profile.big_five.unwrap();
    assert_eq!(scores.openness, 100);
    assert_eq!(scores.conscientiousness, 0);

    // Round-trip: the serialized profile carries the clamped values.
    let round_tripped: Profile =
        serde_json::from_value(serde_json::to_value(&profile).unwrap()).unwrap();
    assert_eq!(round_tripped.big_five.unwrap().openness, 100);
}

#[test]
fn test_malformed_framework_does_not_sink_analysis() {
    let profile: Profile = serde_json::from_value(json!({
        "bigFive": { "openness": "garbage" },
        "mbti": "NOPE",
        "attachmentStyle": "anxious",
        "loveLanguages": "not-an-array"
    }))
    .unwrap();
    assert!(profile.big_five.is_none());
    assert!(profile.mbti.is_none());
    assert!(profile.love_languages.is_none());
    assert_eq!(profile.attachment_style, Some(AttachmentStyle::Anxious));

    // The surviving framework still drives insights.
    let result = Analyzer::default().generate(&profile);
    assert!(!result.self_improvement.is_empty());
    assert_eq!(result.completeness, 14); // 1 of 7
}

#[test]
fn test_love_language_bijection_is_required() {
    // Missing a rank
    let profile: Profile = serde_json::from_value(json!({
        "loveLanguages": [
            { "type": "quality-time", "rank": 1 },
            { "type": "words-of-affirmation", "rank": 2 },
            { "type": "physical-touch", "rank": 3 },
            { "type": "acts-of-service", "rank": 4 }
        ]
    }))
    .unwrap();
    assert!(profile.love_languages.is_none());

    // Repeated type
    let profile: Profile = serde_json::from_value(json!({
        "loveLanguages": [
            { "type": "quality-time", "rank": 1 },
            { "type": "quality-time", "rank": 2 },
            { "type": "physical-touch", "rank": 3 },
            { "type": "acts-of-service", "rank": 4 },
            { "type": "gifts", "rank": 5 }
        ]
    }))
    .unwrap();
    assert!(profile.love_languages.is_none());

    // Complete bijection passes and exposes the rank-1 language
    let profile: Profile = serde_json::from_value(json!({
        "loveLanguages": [
            { "type": "gifts", "rank": 5 },
            { "type": "acts-of-service", "rank": 4 },
            { "type": "physical-touch", "rank": 3 },
            { "type": "words-of-affirmation", "rank": 2 },
            { "type": "quality-time", "rank": 1 }
        ]
    }))
    .unwrap();
    assert_eq!(
        profile.primary_love_language(),
        Some(LoveLanguage::QualityTime)
    );
}

#[test]
fn test_from_json_rejects_non_json() {
    assert!(Profile::from_json("{ not json").is_err());
    let profile = Profile::from_json(r#"{ "mbti": "intj" }"#).unwrap();
    assert_eq!(profile.mbti, Some(Mbti::Intj));
}

#[test]
fn test_mbti_uppercased_on_ingest() {
    let profile: Profile = serde_json::from_value(json!({ "mbti": "enfp" })).unwrap();
    assert_eq!(profile.mbti, Some(Mbti::Enfp));
    let value = serde_json::to_value(&profile).unwrap();
    assert_eq!(value["mbti"], "ENFP");
}

#[test]
fn test_raw_validation_names_what_coercion_drops() {
    let raw = json!({
        "mbti": "NOPE",
        "loveLanguages": [
            { "type": "quality-time", "rank": 1 },
            { "type": "quality-time", "rank": 1 },
            { "type": "physical-touch", "rank": 3 },
            { "type": "acts-of-service", "rank": 4 },
            { "type": "gifts", "rank": 5 }
        ]
    });
    let report = validate::validate_raw(&raw);
    assert!(!report.is_valid());
    let codes: Vec<_> = report.errors.iter().map(|e| e.code).collect();
    assert!(codes.contains(&"INVALID_MBTI"));
    assert!(codes.contains(&"DUPLICATE_TYPES"));
    assert!(codes.contains(&"DUPLICATE_RANKS"));
}

#[test]
fn test_primary_language_drives_green_flag() {
    let profile: Profile = serde_json::from_value(json!({
        "loveLanguages": [
            { "type": "physical-touch", "rank": 1 },
            { "type": "quality-time", "rank": 2 },
            { "type": "words-of-affirmation", "rank": 3 },
            { "type": "acts-of-service", "rank": 4 },
            { "type": "gifts", "rank": 5 }
        ]
    }))
    .unwrap();
    let result = Analyzer::default().generate(&profile);
    assert_eq!(
        result.green_flags[0].title,
        "Seek Naturally Affectionate Partners"
    );
    assert_eq!(
        result.red_flags[0].title,
        "Watch for Physically Distant Partners"
    );
}
