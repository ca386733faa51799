//! LinkedIn profile analysis: a deterministic score, highlights and priority
//! actions, enriched with generated improvement suggestions.

pub mod cli;
pub mod core;
pub mod error;
pub mod profile_analysis;
pub mod types;
pub mod web;

pub use error::AnalysisError;
pub use profile_analysis::{ProfileAnalysisService, ProfileAnalyzer};
pub use types::{AnalysisResult, Improvement, PriorityAction, Profile};
pub use web::start_web_server;
