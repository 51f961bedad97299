//! Insight generation: rule library, category engine, pattern
//! detection, and the analysis orchestrator.

pub mod analysis;
pub mod engine;
pub mod ids;
pub mod library;
pub mod patterns;
pub mod rules;

use serde::{Deserialize, Serialize};

use crate::profile::Framework;

/// Hard ceiling on insights per category. The engine targets exactly
/// this many when enough rules fire and truncates defensively past it.
pub const MAX_PER_CATEGORY: usize = 3;

/// The four insight groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    SelfImprovement,
    Strength,
    GreenFlag,
    RedFlag,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::SelfImprovement,
        Category::Strength,
        Category::GreenFlag,
        Category::RedFlag,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SelfImprovement => "self-improvement",
            Category::Strength => "strength",
            Category::GreenFlag => "green-flag",
            Category::RedFlag => "red-flag",
        }
    }
}

/// One generated insight. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub id: String,
    pub title: String,
    pub description: String,
    pub explanation: String,
    pub actionable: String,
    pub confidence: f64,
    pub sources: Vec<Framework>,
}

/// The complete result of one analysis pass. Constructed fresh on every
/// call and never mutated afterwards; callers own any caching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub self_improvement: Vec<Insight>,
    pub strengths: Vec<Insight>,
    pub green_flags: Vec<Insight>,
    pub red_flags: Vec<Insight>,
    pub confidence: f64,
    pub completeness: u8,
}

impl AnalysisResult {
    pub fn category(&self, category: Category) -> &[Insight] {
        match category {
            Category::SelfImprovement => &self.self_improvement,
            Category::Strength => &self.strengths,
            Category::GreenFlag => &self.green_flags,
            Category::RedFlag => &self.red_flags,
        }
    }
}
