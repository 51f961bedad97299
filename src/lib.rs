//! persona-mind: rule-based insight generation over personality
//! assessment profiles.
//!
//! A validated [`profile::Profile`] goes in; a bounded, prioritized
//! [`insight::AnalysisResult`] comes out - three weighted insights per
//! category (self-improvement, strengths, green flags, red flags) plus
//! aggregate confidence and completeness. The engine is synchronous,
//! allocation-fresh per call, and safe to invoke concurrently.

pub mod config;
pub mod error;
pub mod insight;
pub mod profile;

pub use config::Config;
pub use insight::analysis::Analyzer;
pub use insight::{AnalysisResult, Category, Insight};
pub use profile::Profile;

// Load env from .env if present, silently ignore if missing.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}
