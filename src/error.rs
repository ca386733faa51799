// src/error.rs
use thiserror::Error;

/// The only failure that crosses the analysis boundary. Generation problems
/// are recovered inside the pipeline and never show up here.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Failed to fetch LinkedIn profile")]
    ProfileFetch(#[source] anyhow::Error),
}
