//! The generic category engine: evaluate a rule table, rank the fired
//! candidates, and select up to the quota.
//!
//! One implementation serves all four categories; only the table
//! differs. Generation is deterministic for a fixed profile apart from
//! whatever the injected ID source produces.

use tracing::debug;

use super::ids::IdSource;
use super::library::CategoryTable;
use super::rules::{Rule, render};
use super::{Category, Insight, MAX_PER_CATEGORY};
use crate::profile::Profile;

/// A fired rule awaiting ranking.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub insight: Insight,
    pub weight: f64,
    pub priority: u8,
}

fn build_insight(
    rule: &Rule,
    profile: &Profile,
    category: Category,
    ids: &mut dyn IdSource,
) -> Insight {
    Insight {
        id: ids.next(category),
        title: render(rule.template.title, profile),
        description: render(rule.template.description, profile),
        explanation: render(rule.template.explanation, profile),
        actionable: render(rule.template.actionable, profile),
        confidence: rule.template.confidence,
        sources: rule.sources.to_vec(),
    }
}

/// Sort candidates by (priority asc, weight desc, confidence desc) and
/// take the first `quota` with distinct titles. The sort is stable, so
/// ties keep rule-evaluation order.
pub fn rank_and_select(mut candidates: Vec<Candidate>, quota: usize) -> Vec<Insight> {
    let quota = quota.min(MAX_PER_CATEGORY);
    candidates.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| b.weight.total_cmp(&a.weight))
            .then_with(|| b.insight.confidence.total_cmp(&a.insight.confidence))
    });
    let mut selected: Vec<Insight> = Vec::with_capacity(quota);
    for candidate in candidates {
        if selected.len() >= quota {
            break;
        }
        // The same template firing through two conditions must not
        // surface twice.
        if selected.iter().any(|i| i.title == candidate.insight.title) {
            debug!(title = %candidate.insight.title, "dropping duplicate-title candidate");
            continue;
        }
        selected.push(candidate.insight);
    }
    selected
}

/// Run one category's table against a profile.
pub fn generate_category(
    profile: &Profile,
    table: &CategoryTable,
    quota: usize,
    emit_fallback: bool,
    ids: &mut dyn IdSource,
) -> Vec<Insight> {
    let mut candidates = Vec::new();
    for rule in table.rules {
        if rule.condition.matches(profile) {
            candidates.push(Candidate {
                insight: build_insight(rule, profile, table.category, ids),
                weight: rule.weight,
                priority: rule.priority,
            });
        }
    }
    debug!(
        category = table.category.as_str(),
        fired = candidates.len(),
        "evaluated rule table"
    );

    let selected = rank_and_select(candidates, quota);
    if selected.is_empty() && emit_fallback && profile.has_any_data() {
        // Never leave a category blank when the user gave us anything.
        return vec![Insight {
            id: ids.next(table.category),
            title: table.fallback.title.to_string(),
            description: table.fallback.description.to_string(),
            explanation: table.fallback.explanation.to_string(),
            actionable: table.fallback.actionable.to_string(),
            confidence: table.fallback.confidence,
            sources: vec![crate::profile::Framework::General],
        }];
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insight::ids::SequentialIds;
    use crate::insight::library::table_for;
    use crate::profile::{AttachmentStyle, BigFiveScores, Framework};

    fn candidate(title: &str, weight: f64, priority: u8, confidence: f64) -> Candidate {
        Candidate {
            insight: Insight {
                id: title.to_lowercase().replace(' ', "-"),
                title: title.to_string(),
                description: String::new(),
                explanation: String::new(),
                actionable: String::new(),
                confidence,
                sources: vec![Framework::General],
            },
            weight,
            priority,
        }
    }

    #[test]
    fn test_priority_beats_weight() {
        let selected = rank_and_select(
            vec![
                candidate("Heavy but late", 0.9, 2, 0.9),
                candidate("Light but early", 0.1, 1, 0.1),
            ],
            3,
        );
        assert_eq!(selected[0].title, "Light but early");
        assert_eq!(selected[1].title, "Heavy but late");
    }

    #[test]
    fn test_weight_breaks_priority_ties() {
        let selected = rank_and_select(
            vec![
                candidate("Lighter", 0.2, 1, 0.9),
                candidate("Heavier", 0.4, 1, 0.1),
            ],
            3,
        );
        assert_eq!(selected[0].title, "Heavier");
    }

    #[test]
    fn test_confidence_breaks_weight_ties() {
        let selected = rank_and_select(
            vec![
                candidate("Less sure", 0.3, 1, 0.5),
                candidate("More sure", 0.3, 1, 0.8),
            ],
            3,
        );
        assert_eq!(selected[0].title, "More sure");
    }

    #[test]
    fn test_quota_truncates() {
        let candidates = (0..6)
            .map(|i| candidate(&format!("Candidate {i}"), 0.5, 1, 0.5))
            .collect();
        assert_eq!(rank_and_select(candidates, 3).len(), 3);
    }

    #[test]
    fn test_quota_never_exceeds_ceiling() {
        let candidates = (0..10)
            .map(|i| candidate(&format!("Candidate {i}"), 0.5, 1, 0.5))
            .collect::<Vec<_>>();
        assert_eq!(rank_and_select(candidates, 99).len(), MAX_PER_CATEGORY);
    }

    #[test]
    fn test_duplicate_titles_collapse() {
        let selected = rank_and_select(
            vec![
                candidate("Same Insight", 0.5, 1, 0.9),
                candidate("Same Insight", 0.4, 1, 0.8),
                candidate("Other Insight", 0.3, 2, 0.7),
            ],
            3,
        );
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].title, "Same Insight");
        assert_eq!(selected[0].confidence, 0.9);
    }

    #[test]
    fn test_stable_order_for_full_ties() {
        let selected = rank_and_select(
            vec![
                candidate("First In", 0.3, 2, 0.5),
                candidate("Second In", 0.3, 2, 0.5),
            ],
            3,
        );
        assert_eq!(selected[0].title, "First In");
    }

    #[test]
    fn test_fallback_requires_some_data() {
        let table = table_for(Category::Strength);
        let mut ids = SequentialIds::new();

        let empty = Profile::default();
        assert!(generate_category(&empty, table, 3, true, &mut ids).is_empty());

        // Scores too flat for any strength rule, but data is present.
        let flat = Profile {
            big_five: Some(BigFiveScores::clamped(50, 50, 50, 50, 50)),
            ..Profile::default()
        };
        let insights = generate_category(&flat, table, 3, true, &mut ids);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title, table.fallback.title);
        assert_eq!(insights[0].sources, vec![Framework::General]);
    }

    #[test]
    fn test_fallback_can_be_disabled() {
        let table = table_for(Category::Strength);
        let mut ids = SequentialIds::new();
        let flat = Profile {
            big_five: Some(BigFiveScores::clamped(50, 50, 50, 50, 50)),
            ..Profile::default()
        };
        assert!(generate_category(&flat, table, 3, false, &mut ids).is_empty());
    }

    #[test]
    fn test_secure_profile_gets_attachment_strength_first() {
        let table = table_for(Category::Strength);
        let mut ids = SequentialIds::new();
        let profile = Profile {
            big_five: Some(BigFiveScores::clamped(80, 50, 50, 50, 50)),
            attachment_style: Some(AttachmentStyle::Secure),
            ..Profile::default()
        };
        let insights = generate_category(&profile, table, 3, true, &mut ids);
        // Secure attachment (w 0.4) outranks high openness (w 0.3).
        assert_eq!(insights[0].title, "Secure Attachment Foundation");
        assert_eq!(insights[1].title, "Creative and Intellectually Curious");
    }
}
