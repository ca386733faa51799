// src/core/config_manager.rs
//! Configuration: optional config.yaml overlaid by environment variables

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigManager {
    pub server: ServerConfig,
    pub generation: GenerationConfig,
    pub profile_source: ProfileSourceConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProfileSourceConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: Option<PathBuf>,
    pub filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-pro".to_string(),
            timeout_seconds: 8,
        }
    }
}

impl Default for ProfileSourceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: "https://nubela.co".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            filter: "profile_analyzer=info,rocket::server=off".to_string(),
        }
    }
}

impl ConfigManager {
    /// Load config.yaml (or the file named by ANALYZER_CONFIG) when present,
    /// then apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = std::env::var("ANALYZER_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut config = if path.exists() {
            info!("Loading configuration from {}", path.display());
            Self::from_yaml_file(&path)?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_yaml_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Invalid configuration")
    }

    /// Apply overrides from a key lookup (the process environment in
    /// production).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number"))?;
        }
        if let Some(address) = lookup("ADDRESS") {
            self.server.address = address;
        }

        if let Some(key) = lookup("GEMINI_API_KEY").filter(|k| !k.is_empty()) {
            self.generation.api_key = Some(key);
        }
        if let Some(url) = lookup("GEMINI_API_URL") {
            self.generation.api_url = url;
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            self.generation.model = model;
        }
        if let Some(timeout) = lookup("GENERATION_TIMEOUT_SECS") {
            self.generation.timeout_seconds = timeout
                .parse()
                .map_err(|_| anyhow::anyhow!("GENERATION_TIMEOUT_SECS must be a whole number"))?;
        }

        if let Some(key) = lookup("PROXYCURL_API_KEY").filter(|k| !k.is_empty()) {
            self.profile_source.api_key = Some(key);
        }
        if let Some(url) = lookup("PROXYCURL_API_URL") {
            self.profile_source.api_url = url;
        }

        if let Some(file) = lookup("LOG_FILE") {
            self.logging.file = Some(PathBuf::from(file));
        }

        Ok(())
    }
}
