//! Injected insight ID generation.
//!
//! The engine never reads the clock for IDs: a wall-clock scheme can
//! collide under rapid repeated calls and makes output untestable.
//! Callers pick a source; tests use the sequential one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Category;

/// Source of unique IDs for generated insights.
pub trait IdSource {
    fn next(&mut self, category: Category) -> String;
}

/// Deterministic counter-based IDs (`red-flag-0003`).
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next(&mut self, category: Category) -> String {
        let id = format!("{}-{:04}", category.as_str(), self.counter);
        self.counter += 1;
        id
    }
}

/// Random v4 UUID IDs, collision-safe across concurrent callers.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next(&mut self, category: Category) -> String {
        format!("{}-{}", category.as_str(), Uuid::new_v4())
    }
}

/// Which ID source the analyzer should construct per call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdSourceKind {
    #[default]
    Uuid,
    Sequential,
}

impl IdSourceKind {
    pub fn make(&self) -> Box<dyn IdSource> {
        match self {
            IdSourceKind::Uuid => Box::new(UuidIds),
            IdSourceKind::Sequential => Box::new(SequentialIds::new()),
        }
    }
}
