// src/profile_analysis/analyzer.rs
//! Orchestration: heuristic layer + generated suggestions in one result

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use super::highlights::HighlightExtractor;
use super::priority_actions::PriorityActionSelector;
use super::rules::ScoringRules;
use super::score::ScoreEngine;
use super::suggestions::SuggestionGenerator;
use crate::core::{ProfileProvider, TextGenerator};
use crate::error::AnalysisError;
use crate::types::{AnalysisResult, Profile};

pub struct ProfileAnalyzer {
    score_engine: ScoreEngine,
    highlight_extractor: HighlightExtractor,
    action_selector: PriorityActionSelector,
    suggestion_generator: SuggestionGenerator,
}

impl ProfileAnalyzer {
    pub fn new(generator: Arc<dyn TextGenerator>, generation_timeout: Duration) -> Self {
        Self::with_rules(ScoringRules::default(), generator, generation_timeout)
    }

    pub fn with_rules(
        rules: ScoringRules,
        generator: Arc<dyn TextGenerator>,
        generation_timeout: Duration,
    ) -> Self {
        Self {
            score_engine: ScoreEngine::new(rules),
            highlight_extractor: HighlightExtractor::new(rules),
            action_selector: PriorityActionSelector::new(rules),
            suggestion_generator: SuggestionGenerator::new(generator, generation_timeout),
        }
    }

    /// Analyze a profile. Cannot fail: generation problems fall back to
    /// fixed suggestions.
    pub async fn analyze(&self, profile: &Profile) -> AnalysisResult {
        let score = self.score_engine.score(profile);
        let highlights = self.highlight_extractor.highlights(profile);
        let improvements = self.suggestion_generator.suggestions(profile).await;
        let priority_actions = self.action_selector.priority_actions(profile, score);

        AnalysisResult {
            profile: profile.clone(),
            profile_pic: profile.profile_pic_url.clone(),
            full_name: full_name(profile),
            occupation: profile
                .occupation()
                .or_else(|| profile.headline())
                .unwrap_or_default()
                .to_string(),
            network_size: profile.network_size(),
            score,
            highlights,
            improvements,
            priority_actions,
        }
    }
}

fn full_name(profile: &Profile) -> String {
    format!(
        "{} {}",
        profile.first_name().unwrap_or_default(),
        profile.last_name().unwrap_or_default()
    )
    .trim()
    .to_string()
}

/// Fetches a profile and analyzes it. A fetch failure is the one error that
/// reaches the caller; it carries no partial result.
pub struct ProfileAnalysisService {
    provider: Arc<dyn ProfileProvider>,
    analyzer: ProfileAnalyzer,
}

impl ProfileAnalysisService {
    pub fn new(provider: Arc<dyn ProfileProvider>, analyzer: ProfileAnalyzer) -> Self {
        Self { provider, analyzer }
    }

    pub fn analyzer(&self) -> &ProfileAnalyzer {
        &self.analyzer
    }

    pub async fn analyze_url(&self, profile_url: &str) -> Result<AnalysisResult, AnalysisError> {
        let profile = self.provider.fetch_profile(profile_url).await.map_err(|e| {
            error!("Error fetching profile: {:#}", e);
            AnalysisError::ProfileFetch(e)
        })?;

        let result = self.analyzer.analyze(&profile).await;
        info!(
            "Analyzed profile {} (score {})",
            if result.full_name.is_empty() {
                profile_url
            } else {
                result.full_name.as_str()
            },
            result.score
        );
        Ok(result)
    }
}
