// src/profile_analysis/mod.rs
//! Profile analysis pipeline: score, highlights, priority actions and
//! generated suggestions

pub mod analyzer;
pub mod highlights;
pub mod priority_actions;
pub mod rules;
pub mod score;
pub mod suggestions;

pub use analyzer::{ProfileAnalysisService, ProfileAnalyzer};
pub use highlights::HighlightExtractor;
pub use priority_actions::PriorityActionSelector;
pub use rules::{ScoringRules, STANDARD_RULES};
pub use score::{ScoreBreakdown, ScoreEngine};
pub use suggestions::{GenerationOutcome, SuggestionGenerator};
