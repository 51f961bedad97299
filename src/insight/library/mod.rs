//! The insight library: one static rule table per category, registered
//! behind a single lookup. Pure data, no I/O, no call-order coupling.

pub mod green_flags;
pub mod red_flags;
pub mod self_improvement;
pub mod strengths;

use once_cell::sync::Lazy;

use super::Category;
use super::rules::{Rule, Template};

/// A category's rules plus the fallback used when none of them fire.
pub struct CategoryTable {
    pub category: Category,
    pub rules: &'static [Rule],
    pub fallback: &'static Template,
}

static TABLES: Lazy<[CategoryTable; 4]> = Lazy::new(|| {
    [
        CategoryTable {
            category: Category::SelfImprovement,
            rules: self_improvement::RULES,
            fallback: &self_improvement::FALLBACK,
        },
        CategoryTable {
            category: Category::Strength,
            rules: strengths::RULES,
            fallback: &strengths::FALLBACK,
        },
        CategoryTable {
            category: Category::GreenFlag,
            rules: green_flags::RULES,
            fallback: &green_flags::FALLBACK,
        },
        CategoryTable {
            category: Category::RedFlag,
            rules: red_flags::RULES,
            fallback: &red_flags::FALLBACK,
        },
    ]
});

pub fn table_for(category: Category) -> &'static CategoryTable {
    match category {
        Category::SelfImprovement => &TABLES[0],
        Category::Strength => &TABLES[1],
        Category::GreenFlag => &TABLES[2],
        Category::RedFlag => &TABLES[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_resolves_to_its_table() {
        for category in Category::ALL {
            assert_eq!(table_for(category).category, category);
        }
    }

    #[test]
    fn test_tables_lead_with_priority_one_rules() {
        // Stable tie-breaks depend on tables listing rule groups
        // highest-priority first.
        for category in Category::ALL {
            let table = table_for(category);
            assert!(!table.rules.is_empty());
            assert_eq!(table.rules[0].priority, 1);
        }
    }

    #[test]
    fn test_fallbacks_are_low_confidence() {
        for category in Category::ALL {
            assert!(table_for(category).fallback.confidence <= 0.5);
        }
    }
}
