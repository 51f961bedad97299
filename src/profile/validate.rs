//! Validation over raw and typed profile data.
//!
//! Coercion (`coerce`) is deliberately forgiving; this module is where
//! problems get named. Raw-shape checks catch what the forgiving layer
//! would silently drop, business-rule checks flag suspicious but legal
//! values.

use serde::Serialize;
use serde_json::Value;

use super::{AttachmentStyle, BigFiveTrait, LoveLanguage, Mbti, Profile};

/// A single validation finding, addressable by field and code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub code: &'static str,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: impl Into<String>, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }
}

/// Errors block a framework from analysis; warnings do not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

const BIG_FIVE_TRAITS: [&str; 5] = [
    "openness",
    "conscientiousness",
    "extraversion",
    "agreeableness",
    "neuroticism",
];

/// Check a raw JSON profile document before coercion. Findings here
/// explain why the forgiving deserializer will drop a framework.
pub fn validate_raw(raw: &Value) -> ValidationReport {
    let mut report = ValidationReport::default();
    let Some(obj) = raw.as_object() else {
        report.errors.push(ValidationIssue::new(
            "profile",
            "NOT_AN_OBJECT",
            "profile document must be a JSON object",
        ));
        return report;
    };

    if let Some(big_five) = obj.get("bigFive") {
        validate_raw_big_five(big_five, &mut report);
    }
    if let Some(mbti) = obj.get("mbti") {
        let valid = mbti.as_str().and_then(Mbti::parse).is_some();
        if !valid {
            report.errors.push(ValidationIssue::new(
                "mbti",
                "INVALID_MBTI",
                format!("not one of the 16 MBTI codes: {mbti}"),
            ));
        }
    }
    if let Some(style) = obj.get("attachmentStyle") {
        let valid = style.as_str().and_then(AttachmentStyle::parse).is_some();
        if !valid {
            report.errors.push(ValidationIssue::new(
                "attachmentStyle",
                "INVALID_ATTACHMENT_STYLE",
                format!("unknown attachment style: {style}"),
            ));
        }
    }
    if let Some(languages) = obj.get("loveLanguages") {
        validate_raw_love_languages(languages, &mut report);
    }

    report
}

fn validate_raw_big_five(value: &Value, report: &mut ValidationReport) {
    let Some(map) = value.as_object() else {
        report.errors.push(ValidationIssue::new(
            "bigFive",
            "INVALID_BIG_FIVE",
            "big five scores must be an object",
        ));
        return;
    };
    for name in BIG_FIVE_TRAITS {
        let parsed = map.get(name).and_then(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        });
        match parsed {
            None => {
                report.errors.push(ValidationIssue::new(
                    format!("bigFive.{name}"),
                    "MISSING_TRAIT",
                    format!("trait '{name}' is missing or not numeric"),
                ));
            }
            Some(score) if !(0.0..=100.0).contains(&score) => {
                report.warnings.push(ValidationIssue::new(
                    format!("bigFive.{name}"),
                    "CLAMPED_SCORE",
                    format!("score {score} is outside 0-100 and will be clamped"),
                ));
            }
            Some(_) => {}
        }
    }
}

fn validate_raw_love_languages(value: &Value, report: &mut ValidationReport) {
    let Some(items) = value.as_array() else {
        report.errors.push(ValidationIssue::new(
            "loveLanguages",
            "INVALID_LOVE_LANGUAGES",
            "love languages must be an array",
        ));
        return;
    };
    if items.len() != 5 {
        report.errors.push(ValidationIssue::new(
            "loveLanguages",
            "WRONG_COUNT",
            format!("expected 5 entries, got {}", items.len()),
        ));
    }
    let mut ranks: Vec<i64> = Vec::new();
    let mut types: Vec<LoveLanguage> = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let language = item
            .get("type")
            .and_then(Value::as_str)
            .and_then(LoveLanguage::parse);
        match language {
            Some(language) => {
                if types.contains(&language) {
                    report.errors.push(ValidationIssue::new(
                        "loveLanguages",
                        "DUPLICATE_TYPES",
                        format!("'{}' appears more than once", language.as_str()),
                    ));
                }
                types.push(language);
            }
            None => {
                report.errors.push(ValidationIssue::new(
                    format!("loveLanguages[{index}].type"),
                    "INVALID_TYPE",
                    "not one of the five love languages",
                ));
            }
        }
        if let Some(rank) = item.get("rank").and_then(Value::as_i64) {
            if ranks.contains(&rank) {
                report.errors.push(ValidationIssue::new(
                    "loveLanguages",
                    "DUPLICATE_RANKS",
                    format!("rank {rank} appears more than once"),
                ));
            }
            ranks.push(rank);
        }
    }
}

/// Business-rule checks over an already-typed profile.
pub fn validate_profile(profile: &Profile) -> ValidationReport {
    let mut report = ValidationReport::default();

    if let Some(scores) = profile.big_five {
        for t in BigFiveTrait::ALL {
            let score = scores.score(t);
            if !(10..=90).contains(&score) {
                report.warnings.push(ValidationIssue::new(
                    format!("bigFive.{}", t.as_str()),
                    "EXTREME_SCORE",
                    format!(
                        "extreme {} score ({score}) - please verify accuracy",
                        t.as_str()
                    ),
                ));
            }
        }
    }

    if let Some(chinese) = profile.chinese_zodiac {
        if !(1900..=2100).contains(&chinese.year) {
            report.warnings.push(ValidationIssue::new(
                "chineseZodiac.year",
                "UNUSUAL_YEAR",
                "birth year seems unusual - please verify",
            ));
        }
    }

    if profile.completeness() < 30 {
        report.warnings.push(ValidationIssue::new(
            "completeness",
            "LOW_COMPLETENESS",
            "consider completing more frameworks for better insights",
        ));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::BigFiveScores;
    use serde_json::json;

    fn codes(issues: &[ValidationIssue]) -> Vec<&'static str> {
        issues.iter().map(|i| i.code).collect()
    }

    #[test]
    fn test_raw_valid_profile_passes() {
        let report = validate_raw(&json!({
            "bigFive": {
                "openness": 75, "conscientiousness": 60, "extraversion": 80,
                "agreeableness": 70, "neuroticism": 40
            },
            "mbti": "ENFP",
            "attachmentStyle": "secure",
            "loveLanguages": [
                { "type": "quality-time", "rank": 1 },
                { "type": "words-of-affirmation", "rank": 2 },
                { "type": "physical-touch", "rank": 3 },
                { "type": "acts-of-service", "rank": 4 },
                { "type": "gifts", "rank": 5 }
            ]
        }));
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_raw_out_of_range_scores_warn() {
        let report = validate_raw(&json!({
            "bigFive": {
                "openness": 150, "conscientiousness": -10, "extraversion": 80,
                "agreeableness": 70, "neuroticism": 40
            }
        }));
        assert!(report.is_valid());
        assert_eq!(codes(&report.warnings), vec!["CLAMPED_SCORE", "CLAMPED_SCORE"]);
    }

    #[test]
    fn test_raw_invalid_mbti_errors() {
        let report = validate_raw(&json!({ "mbti": "INVALID" }));
        assert!(!report.is_valid());
        assert_eq!(codes(&report.errors), vec!["INVALID_MBTI"]);
    }

    #[test]
    fn test_raw_duplicate_love_language_entries() {
        let report = validate_raw(&json!({
            "loveLanguages": [
                { "type": "quality-time", "rank": 1 },
                { "type": "quality-time", "rank": 1 }
            ]
        }));
        let error_codes = codes(&report.errors);
        assert!(error_codes.contains(&"WRONG_COUNT"));
        assert!(error_codes.contains(&"DUPLICATE_TYPES"));
        assert!(error_codes.contains(&"DUPLICATE_RANKS"));
    }

    #[test]
    fn test_profile_extreme_scores_warn() {
        let mut profile = Profile::default();
        profile.big_five = Some(BigFiveScores::clamped(95, 5, 50, 50, 50));
        let report = validate_profile(&profile);
        assert!(report.is_valid());
        let warning_codes = codes(&report.warnings);
        assert_eq!(
            warning_codes
                .iter()
                .filter(|c| **c == "EXTREME_SCORE")
                .count(),
            2
        );
        // 1 of 7 frameworks -> low completeness warning too
        assert!(warning_codes.contains(&"LOW_COMPLETENESS"));
    }

    #[test]
    fn test_profile_unusual_year_warns() {
        let mut profile = Profile::default();
        profile.chinese_zodiac = Some(crate::profile::derive::chinese_zodiac_for_year(1850));
        let report = validate_profile(&profile);
        assert!(codes(&report.warnings).contains(&"UNUSUAL_YEAR"));
    }
}
