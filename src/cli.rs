// src/cli.rs
use crate::core::{text_generator_from_config, ConfigManager, FileProfileProvider, ProxycurlClient};
use crate::profile_analysis::{ProfileAnalysisService, ProfileAnalyzer};
use crate::types::AnalysisResult;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(name = "profile-analyzer")]
#[command(about = "Score LinkedIn profiles and suggest improvements")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
    /// Analyze a profile exported as JSON
    Analyze {
        #[arg(long)]
        profile: PathBuf,
        #[arg(long)]
        pretty: bool,
    },
    /// Fetch a profile from the profile API and analyze it
    Fetch {
        url: String,
        #[arg(long)]
        pretty: bool,
    },
}

pub async fn handle_command(cli: Cli, mut config: ConfigManager) -> Result<()> {
    match cli.command {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            crate::web::start_web_server(config).await
        }
        Command::Analyze { profile, pretty } => {
            let source = profile.display().to_string();
            let service = ProfileAnalysisService::new(
                Arc::new(FileProfileProvider::new(profile)),
                build_analyzer(&config)?,
            );
            let result = service.analyze_url(&source).await?;
            print_result(&result, pretty)
        }
        Command::Fetch { url, pretty } => {
            let service = ProfileAnalysisService::new(
                Arc::new(ProxycurlClient::new(&config.profile_source)?),
                build_analyzer(&config)?,
            );
            let result = service.analyze_url(&url).await?;
            print_result(&result, pretty)
        }
    }
}

fn build_analyzer(config: &ConfigManager) -> Result<ProfileAnalyzer> {
    let generator = text_generator_from_config(&config.generation)?;
    Ok(ProfileAnalyzer::new(
        generator,
        Duration::from_secs(config.generation.timeout_seconds),
    ))
}

fn print_result(result: &AnalysisResult, pretty: bool) -> Result<()> {
    info!("Profile score: {}", result.score);
    let output = if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    }
    .context("Failed to serialize analysis result")?;

    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::parse_from(["profile-analyzer", "analyze", "--profile", "me.json", "--pretty"]);
        match cli.command {
            Command::Analyze { profile, pretty } => {
                assert_eq!(profile, PathBuf::from("me.json"));
                assert!(pretty);
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[tokio::test]
    async fn test_analyze_command_without_api_key_uses_fallbacks() {
        let path = std::env::temp_dir().join(format!("cli-profile-{}.json", std::process::id()));
        tokio::fs::write(&path, r#"{"first_name": "Ada", "summary": "Hi"}"#)
            .await
            .unwrap();

        let service = ProfileAnalysisService::new(
            Arc::new(FileProfileProvider::new(path.clone())),
            build_analyzer(&ConfigManager::default()).unwrap(),
        );
        let result = service.analyze_url("ignored").await.unwrap();
        assert_eq!(result.full_name, "Ada");
        assert_eq!(result.improvements.len(), 3);

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
