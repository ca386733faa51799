// src/core/mod.rs
//! Configuration and the external collaborators the analysis relies on

pub mod config_manager;
pub mod profile_provider;
pub mod text_generator;

pub use config_manager::ConfigManager;
pub use profile_provider::{FileProfileProvider, ProfileProvider, ProxycurlClient};
pub use text_generator::{text_generator_from_config, DisabledGenerator, GeminiClient, TextGenerator};
