//! Analysis orchestrator: runs the four category engines, detects
//! cross-framework patterns, and blends the aggregate metrics.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use super::engine::generate_category;
use super::ids::IdSource;
use super::library::table_for;
use super::patterns::{self, Pattern, detect_patterns};
use super::{AnalysisResult, Category};
use crate::config::EngineConfig;
use crate::profile::{Framework, Profile, derive};

/// Per-framework completeness breakdown with recommendations, for the
/// assessment surface to render alongside the insights.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletenessReport {
    pub overall: u8,
    pub frameworks: BTreeMap<&'static str, u8>,
    pub missing_frameworks: Vec<Framework>,
    pub recommendations: Vec<String>,
}

/// The orchestrator. Pure request/response: holds only configuration,
/// never state from prior calls, so one instance serves any number of
/// concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: EngineConfig,
}

impl Analyzer {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Generate the full analysis using the configured ID source.
    pub fn generate(&self, profile: &Profile) -> AnalysisResult {
        let mut ids = self.config.id_source.make();
        self.generate_with(profile, ids.as_mut())
    }

    /// Generate the full analysis with an injected ID source. With a
    /// deterministic source the entire result is deterministic.
    pub fn generate_with(&self, profile: &Profile, ids: &mut dyn IdSource) -> AnalysisResult {
        let completeness = profile.completeness();
        let patterns = detect_patterns(profile);
        let confidence = overall_confidence(profile, &patterns);
        debug!(
            completeness,
            confidence,
            patterns = patterns.len(),
            "analysis metrics computed"
        );

        let mut category = |c: Category| {
            generate_category(
                profile,
                table_for(c),
                self.config.quota,
                self.config.emit_fallback,
                ids,
            )
        };

        AnalysisResult {
            self_improvement: category(Category::SelfImprovement),
            strengths: category(Category::Strength),
            green_flags: category(Category::GreenFlag),
            red_flags: category(Category::RedFlag),
            confidence,
            completeness,
        }
    }

    /// Per-framework completeness scores and what to fill in next.
    pub fn completeness_report(&self, profile: &Profile) -> CompletenessReport {
        let missing = derive::missing_frameworks(profile);
        let mut frameworks = BTreeMap::new();
        for framework in Framework::RECOGNIZED {
            let score = if missing.contains(&framework) {
                0
            } else {
                100
            };
            frameworks.insert(framework.as_str(), score);
        }
        // Zodiac earns partial credit: sun alone is most of the value.
        if let Some(zodiac) = &profile.zodiac {
            let mut score = 60;
            if zodiac.moon.is_some() {
                score += 20;
            }
            if zodiac.rising.is_some() {
                score += 20;
            }
            frameworks.insert(Framework::Zodiac.as_str(), score);
        }

        let overall = profile.completeness();
        let mut recommendations = Vec::new();
        if missing.contains(&Framework::BigFive) {
            recommendations
                .push("Complete Big Five assessment for core personality insights".to_string());
        }
        if missing.contains(&Framework::AttachmentStyle) {
            recommendations
                .push("Take attachment style assessment for relationship insights".to_string());
        }
        if missing.contains(&Framework::LoveLanguages) {
            recommendations.push(
                "Add Love Languages for better relationship compatibility insights".to_string(),
            );
        }
        if overall < 50 {
            recommendations
                .push("Complete at least 3-4 frameworks for meaningful analysis".to_string());
        }
        if missing.is_empty() {
            recommendations.push("All frameworks completed - insights are comprehensive".to_string());
        }

        CompletenessReport {
            overall,
            frameworks,
            missing_frameworks: missing,
            recommendations,
        }
    }
}

/// Blend data presence (weighted by framework importance) with the mean
/// confidence of detected patterns, 60/40, rounded to 2 decimals.
fn overall_confidence(profile: &Profile, detected: &[Pattern]) -> f64 {
    let mut weighted_presence = 0.0;
    if profile.attachment_style.is_some() {
        weighted_presence += patterns::ATTACHMENT_WEIGHT;
    }
    if profile.big_five.is_some() {
        weighted_presence += patterns::BIG_FIVE_WEIGHT;
    }
    if profile.mbti.is_some() {
        weighted_presence += patterns::MBTI_WEIGHT;
    }
    if profile.love_languages.is_some() {
        weighted_presence += patterns::LOVE_LANGUAGE_WEIGHT;
    }
    let total_weight = patterns::ATTACHMENT_WEIGHT
        + patterns::BIG_FIVE_WEIGHT
        + patterns::MBTI_WEIGHT
        + patterns::LOVE_LANGUAGE_WEIGHT;
    let data_confidence = weighted_presence / total_weight;

    // Neutral midpoint when nothing was detected.
    let pattern_confidence = if detected.is_empty() {
        0.5
    } else {
        detected.iter().map(|p| p.confidence).sum::<f64>() / detected.len() as f64
    };

    ((data_confidence * 0.6 + pattern_confidence * 0.4) * 100.0).round() / 100.0
}
