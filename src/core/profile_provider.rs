// src/core/profile_provider.rs
//! Sources of profile records: the Proxycurl API, or a JSON file on disk

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use tracing::{error, info};

use super::config_manager::ProfileSourceConfig;
use crate::types::Profile;

const PROFILE_ENDPOINT: &str = "/proxycurl/api/v2/linkedin";

#[async_trait]
pub trait ProfileProvider: Send + Sync {
    async fn fetch_profile(&self, profile_url: &str) -> Result<Profile>;
}

pub struct ProxycurlClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ProxycurlClient {
    pub fn new(config: &ProfileSourceConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .context("PROXYCURL_API_KEY not configured")?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ProfileProvider for ProxycurlClient {
    async fn fetch_profile(&self, profile_url: &str) -> Result<Profile> {
        let url = format!("{}{}", self.base_url, PROFILE_ENDPOINT);
        info!("Fetching profile: {}", profile_url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(&[
                ("url", profile_url),
                ("fallback_to_cache", "on-error"),
                ("use_cache", "if-present"),
                ("skills", "include"),
                ("education", "include"),
                ("experience", "include"),
            ])
            .send()
            .await
            .context("Failed to call profile API")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Profile API error {}: {}", status, error_text);
            anyhow::bail!("Profile API returned error {}: {}", status, error_text);
        }

        response
            .json::<Profile>()
            .await
            .context("Failed to parse profile response")
    }
}

/// Reads a profile exported as JSON. The identifier is ignored; the same
/// file is returned for every request.
pub struct FileProfileProvider {
    path: PathBuf,
}

impl FileProfileProvider {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ProfileProvider for FileProfileProvider {
    async fn fetch_profile(&self, _profile_url: &str) -> Result<Profile> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read file: {}", self.path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse profile JSON: {}", self.path.display()))
    }
}
