// src/core/text_generator.rs
//! Text-generation capability and the Gemini client behind it

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::config_manager::GenerationConfig;
use std::sync::Arc;

/// Anything that turns a prompt into free text. Failures of any kind are
/// reported through the `Result`; callers decide how to recover.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

// ===== Gemini wire format =====

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().map(|part| part.text).collect();
        Some(text)
    }
}

// ===== Gemini client =====

pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &GenerationConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .context("GEMINI_API_KEY not configured")?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        info!("Sending generation request to model {}", self.model);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Gemini API")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Gemini API error {}: {}", status, error_text);
            anyhow::bail!("Gemini API returned error {}: {}", status, error_text);
        }

        let generated: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini API response")?;

        let text = generated
            .into_text()
            .context("Gemini API response contained no candidates")?;

        info!("Received {} characters from Gemini API", text.len());
        Ok(text)
    }
}

/// Gemini when an API key is configured, otherwise [`DisabledGenerator`].
pub fn text_generator_from_config(config: &GenerationConfig) -> Result<Arc<dyn TextGenerator>> {
    if config.api_key.is_none() {
        warn!("GEMINI_API_KEY not set, suggestions will use fallback content");
        return Ok(Arc::new(DisabledGenerator));
    }
    Ok(Arc::new(GeminiClient::new(config)?))
}

/// Generator used when no API key is configured. Every call fails, so the
/// analysis still completes with fallback suggestions.
pub struct DisabledGenerator;

#[async_trait]
impl TextGenerator for DisabledGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        anyhow::bail!("Text generation is disabled: GEMINI_API_KEY not configured")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text_joins_parts_of_first_candidate() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "[{\"title\":"}, {"text": "\"x\"}]"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.into_text().unwrap(), r#"[{"title":"x"}]"#);
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap();
        assert!(response.into_text().is_none());
    }

    #[test]
    fn test_endpoint_includes_model() {
        let config = GenerationConfig {
            api_key: Some("key".to_string()),
            api_url: "https://generativelanguage.googleapis.com/".to_string(),
            ..Default::default()
        };
        let client = GeminiClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_client_requires_api_key() {
        assert!(GeminiClient::new(&GenerationConfig::default()).is_err());
    }

    #[tokio::test]
    async fn test_disabled_generator_always_fails() {
        assert!(DisabledGenerator.generate("anything").await.is_err());
    }
}
