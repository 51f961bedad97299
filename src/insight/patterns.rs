//! Cross-framework pattern detection.
//!
//! A lightweight pass over the profile, independent of which textual
//! insights get selected. Detected patterns feed only the aggregate
//! confidence blend.

use crate::profile::{AttachmentStyle, Framework, Profile};

/// Relative framework weights for cross-framework analysis. Attachment
/// theory dominates relationship-oriented reasoning; the informational
/// frameworks carry nothing.
pub const ATTACHMENT_WEIGHT: f64 = 0.6;
pub const BIG_FIVE_WEIGHT: f64 = 0.25;
pub const MBTI_WEIGHT: f64 = 0.1;
pub const LOVE_LANGUAGE_WEIGHT: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Contradiction,
    Strength,
    GrowthOpportunity,
    Compatibility,
}

/// One detected cross-framework pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub kind: PatternKind,
    pub confidence: f64,
    pub frameworks: Vec<Framework>,
    pub description: String,
    pub weight: f64,
}

/// Run all detectors over the profile.
pub fn detect_patterns(profile: &Profile) -> Vec<Pattern> {
    let mut patterns = Vec::new();
    detect_contradictions(profile, &mut patterns);
    detect_strengths(profile, &mut patterns);
    detect_growth_opportunities(profile, &mut patterns);
    detect_compatibility(profile, &mut patterns);
    patterns
}

fn detect_contradictions(profile: &Profile, patterns: &mut Vec<Pattern>) {
    if let (Some(mbti), Some(scores)) = (profile.mbti, profile.big_five) {
        let extraversion = scores.extraversion;
        let mismatch = (mbti.is_extraverted() && extraversion < 40)
            || (!mbti.is_extraverted() && extraversion > 60);
        if mismatch {
            patterns.push(Pattern {
                kind: PatternKind::Contradiction,
                confidence: 0.7,
                frameworks: vec![Framework::Mbti, Framework::BigFive],
                description: "Extraversion mismatch between MBTI and Big Five".to_string(),
                weight: MBTI_WEIGHT + BIG_FIVE_WEIGHT,
            });
        }
    }

    if profile.attachment_style == Some(AttachmentStyle::Anxious) {
        if let Some(scores) = profile.big_five {
            if scores.neuroticism > 70 {
                patterns.push(Pattern {
                    kind: PatternKind::Contradiction,
                    confidence: 0.8,
                    frameworks: vec![Framework::AttachmentStyle, Framework::BigFive],
                    description: "High anxiety across multiple frameworks".to_string(),
                    weight: ATTACHMENT_WEIGHT + BIG_FIVE_WEIGHT,
                });
            }
        }
    }
}

fn detect_strengths(profile: &Profile, patterns: &mut Vec<Pattern>) {
    if let Some(scores) = profile.big_five {
        let highs = [
            (scores.openness, "High openness to experience"),
            (scores.conscientiousness, "High conscientiousness"),
            (scores.extraversion, "High extraversion"),
            (scores.agreeableness, "High agreeableness"),
        ];
        for (score, description) in highs {
            if score > 75 {
                patterns.push(Pattern {
                    kind: PatternKind::Strength,
                    confidence: 0.8,
                    frameworks: vec![Framework::BigFive],
                    description: description.to_string(),
                    weight: BIG_FIVE_WEIGHT,
                });
            }
        }
    }

    if profile.attachment_style == Some(AttachmentStyle::Secure) {
        patterns.push(Pattern {
            kind: PatternKind::Strength,
            confidence: 0.9,
            frameworks: vec![Framework::AttachmentStyle],
            description: "Secure attachment style".to_string(),
            weight: ATTACHMENT_WEIGHT,
        });
    }
}

fn detect_growth_opportunities(profile: &Profile, patterns: &mut Vec<Pattern>) {
    if let Some(scores) = profile.big_five {
        if scores.conscientiousness < 40 {
            patterns.push(Pattern {
                kind: PatternKind::GrowthOpportunity,
                confidence: 0.75,
                frameworks: vec![Framework::BigFive],
                description: "Low conscientiousness - organization opportunity".to_string(),
                weight: BIG_FIVE_WEIGHT,
            });
        }
        if scores.agreeableness < 40 {
            patterns.push(Pattern {
                kind: PatternKind::GrowthOpportunity,
                confidence: 0.7,
                frameworks: vec![Framework::BigFive],
                description: "Low agreeableness - empathy development".to_string(),
                weight: BIG_FIVE_WEIGHT,
            });
        }
        if scores.neuroticism > 70 {
            patterns.push(Pattern {
                kind: PatternKind::GrowthOpportunity,
                confidence: 0.8,
                frameworks: vec![Framework::BigFive],
                description: "High neuroticism - emotional regulation".to_string(),
                weight: BIG_FIVE_WEIGHT,
            });
        }
    }

    if let Some(style) = profile.attachment_style {
        if !style.is_secure() {
            patterns.push(Pattern {
                kind: PatternKind::GrowthOpportunity,
                confidence: 0.85,
                frameworks: vec![Framework::AttachmentStyle],
                description: format!("{} attachment - relationship work", style.as_str()),
                weight: ATTACHMENT_WEIGHT,
            });
        }
    }
}

fn detect_compatibility(profile: &Profile, patterns: &mut Vec<Pattern>) {
    if let Some(style) = profile.attachment_style {
        patterns.push(Pattern {
            kind: PatternKind::Compatibility,
            confidence: 0.9,
            frameworks: vec![Framework::AttachmentStyle],
            description: format!("Attachment-based compatibility for {}", style.as_str()),
            weight: ATTACHMENT_WEIGHT,
        });
    }

    if profile.big_five.is_some() {
        patterns.push(Pattern {
            kind: PatternKind::Compatibility,
            confidence: 0.7,
            frameworks: vec![Framework::BigFive],
            description: "Big Five complementary trait needs".to_string(),
            weight: BIG_FIVE_WEIGHT,
        });
    }

    if let Some(language) = profile.primary_love_language() {
        patterns.push(Pattern {
            kind: PatternKind::Compatibility,
            confidence: 0.75,
            frameworks: vec![Framework::LoveLanguages],
            description: format!("Primary love language: {}", language.as_str()),
            weight: LOVE_LANGUAGE_WEIGHT,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{BigFiveScores, LoveLanguage, LoveLanguageRanking, Mbti};

    #[test]
    fn test_empty_profile_has_no_patterns() {
        assert!(detect_patterns(&Profile::default()).is_empty());
    }

    #[test]
    fn test_extraversion_mismatch_both_directions() {
        let mut profile = Profile {
            mbti: Some(Mbti::Enfp),
            big_five: Some(BigFiveScores::clamped(50, 50, 30, 50, 50)),
            ..Profile::default()
        };
        let patterns = detect_patterns(&profile);
        assert!(patterns
            .iter()
            .any(|p| p.kind == PatternKind::Contradiction));

        profile.mbti = Some(Mbti::Infp);
        profile.big_five = Some(BigFiveScores::clamped(50, 50, 70, 50, 50));
        let patterns = detect_patterns(&profile);
        assert!(patterns
            .iter()
            .any(|p| p.kind == PatternKind::Contradiction));

        // Aligned: introverted code, low score
        profile.big_five = Some(BigFiveScores::clamped(50, 50, 30, 50, 50));
        let patterns = detect_patterns(&profile);
        assert!(!patterns
            .iter()
            .any(|p| p.kind == PatternKind::Contradiction));
    }

    #[test]
    fn test_compounded_anxiety_pattern() {
        let profile = Profile {
            attachment_style: Some(AttachmentStyle::Anxious),
            big_five: Some(BigFiveScores::clamped(50, 50, 50, 50, 75)),
            ..Profile::default()
        };
        let patterns = detect_patterns(&profile);
        let compounded = patterns
            .iter()
            .find(|p| p.description == "High anxiety across multiple frameworks")
            .unwrap();
        assert_eq!(compounded.confidence, 0.8);
        assert!((compounded.weight - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_secure_attachment_is_strength_not_growth() {
        let profile = Profile {
            attachment_style: Some(AttachmentStyle::Secure),
            ..Profile::default()
        };
        let patterns = detect_patterns(&profile);
        assert!(patterns.iter().any(|p| p.kind == PatternKind::Strength));
        assert!(!patterns
            .iter()
            .any(|p| p.kind == PatternKind::GrowthOpportunity));
    }

    #[test]
    fn test_love_language_compatibility_pattern() {
        let ranking = LoveLanguageRanking::from_entries(&[
            (LoveLanguage::Gifts, 1),
            (LoveLanguage::QualityTime, 2),
            (LoveLanguage::WordsOfAffirmation, 3),
            (LoveLanguage::ActsOfService, 4),
            (LoveLanguage::PhysicalTouch, 5),
        ])
        .unwrap();
        let profile = Profile {
            love_languages: Some(ranking),
            ..Profile::default()
        };
        let patterns = detect_patterns(&profile);
        assert!(patterns
            .iter()
            .any(|p| p.description == "Primary love language: gifts"));
    }
}
