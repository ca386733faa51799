// src/profile_analysis/suggestions.rs
//! Generated improvement suggestions with deterministic fallbacks

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::core::TextGenerator;
use crate::types::{Improvement, Profile};

pub const MIN_SUGGESTIONS: usize = 3;
pub const MAX_SUGGESTIONS: usize = 4;

/// Returned when the provider answered but the text is not a usable JSON
/// array of suggestions.
const MALFORMED_RESPONSE_FALLBACK: [(&str, &str); 4] = [
    (
        "Enhance Your Professional Summary",
        "Consider expanding your profile summary to highlight your key achievements and career aspirations. A well-crafted summary helps you stand out to recruiters.",
    ),
    (
        "Add More Project Details",
        "Your experience section could benefit from more specific project examples and outcomes. Share your achievements with metrics when possible.",
    ),
    (
        "Expand Your Network",
        "Consider growing your professional network by connecting with colleagues and industry peers. A larger network can lead to more opportunities.",
    ),
    (
        "Highlight Your AI Expertise",
        "Showcase your AI and machine learning skills more prominently. Include specific technologies, frameworks, and methodologies you've worked with in your projects.",
    ),
];

/// Returned when the provider call itself failed or timed out.
const PROVIDER_FAILURE_FALLBACK: [(&str, &str); 3] = [
    (
        "Complete Your Profile",
        "Take some time to fill out all sections of your profile. A complete profile helps you appear more professional and engaged.",
    ),
    (
        "Add Your Achievements",
        "Share your professional accomplishments and the impact you've made in your roles. This helps showcase your value to potential connections.",
    ),
    (
        "Update Your Skills",
        "Keep your skills section current with relevant industry skills and technologies you're proficient in.",
    ),
];

pub fn malformed_response_fallback() -> Vec<Improvement> {
    to_improvements(&MALFORMED_RESPONSE_FALLBACK)
}

pub fn provider_failure_fallback() -> Vec<Improvement> {
    to_improvements(&PROVIDER_FAILURE_FALLBACK)
}

fn to_improvements(table: &[(&str, &str)]) -> Vec<Improvement> {
    table
        .iter()
        .map(|(title, details)| Improvement::new(title, details))
        .collect()
}

/// Result of one generation attempt, before any fallback is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    Parsed(Vec<Improvement>),
    ProviderFailed(String),
    MalformedResponse(String),
}

impl GenerationOutcome {
    /// Map the outcome to the suggestions handed to the caller.
    pub fn into_suggestions(self) -> Vec<Improvement> {
        match self {
            GenerationOutcome::Parsed(mut suggestions) => {
                suggestions.truncate(MAX_SUGGESTIONS);
                suggestions
            }
            GenerationOutcome::MalformedResponse(reason) => {
                warn!("Unusable generation response, using fallback: {}", reason);
                malformed_response_fallback()
            }
            GenerationOutcome::ProviderFailed(reason) => {
                warn!("Generation provider failed, using fallback: {}", reason);
                provider_failure_fallback()
            }
        }
    }
}

/// Strict parse: the whole response must be a JSON array of
/// `{title, details}` with at least three entries.
pub fn parse_suggestions(text: &str) -> GenerationOutcome {
    match serde_json::from_str::<Vec<Improvement>>(text.trim()) {
        Ok(suggestions) if suggestions.len() >= MIN_SUGGESTIONS => {
            GenerationOutcome::Parsed(suggestions)
        }
        Ok(suggestions) => GenerationOutcome::MalformedResponse(format!(
            "expected at least {} suggestions, got {}",
            MIN_SUGGESTIONS,
            suggestions.len()
        )),
        Err(e) => GenerationOutcome::MalformedResponse(e.to_string()),
    }
}

pub fn build_prompt(profile: &Profile) -> Result<String> {
    let profile_json =
        serde_json::to_string(profile).context("Failed to serialize profile for prompt")?;

    Ok(format!(
        r#"You are a professional LinkedIn profile analyzer. Analyze this LinkedIn profile data and provide 3-4 personalized suggestions for improvement.
Be encouraging, specific, and focus on the individual's potential based on their current profile.

Profile Data:
{}

Guidelines:
1. Each suggestion should be unique and tailored to the profile
2. Focus on positive growth opportunities
3. Be specific but encouraging
4. Consider the person's industry and experience level
5. Provide actionable steps in the details
6. Keep the tone professional but friendly

Format your response as a JSON array with exactly this structure:
[
    {{
        "title": "A brief, encouraging title for the improvement area",
        "details": "2-3 sentences explaining the suggestion and how to implement it. Be specific and actionable."
    }}
]

Example format (but make yours unique to this profile):
[
    {{
        "title": "Showcase Your Project Impact",
        "details": "Your experience shows great potential. Consider adding specific metrics and outcomes for your key projects, such as 'Increased team productivity by 40%' or 'Led successful migration of 100k users'."
    }}
]

Respond with the JSON array only."#,
        profile_json
    ))
}

pub struct SuggestionGenerator {
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl SuggestionGenerator {
    pub fn new(generator: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// Three or four suggestions. Never fails.
    pub async fn suggestions(&self, profile: &Profile) -> Vec<Improvement> {
        self.generate(profile).await.into_suggestions()
    }

    /// One provider call, no retry, bounded by the configured timeout.
    pub async fn generate(&self, profile: &Profile) -> GenerationOutcome {
        let prompt = match build_prompt(profile) {
            Ok(prompt) => prompt,
            Err(e) => return GenerationOutcome::ProviderFailed(format!("{:#}", e)),
        };

        match tokio::time::timeout(self.timeout, self.generator.generate(&prompt)).await {
            Ok(Ok(text)) => {
                info!("Received generation response ({} bytes)", text.len());
                parse_suggestions(&text)
            }
            Ok(Err(e)) => GenerationOutcome::ProviderFailed(format!("{:#}", e)),
            Err(_) => GenerationOutcome::ProviderFailed(format!(
                "no response within {}s",
                self.timeout.as_secs_f32()
            )),
        }
    }
}
