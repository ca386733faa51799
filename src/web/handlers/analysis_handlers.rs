// src/web/handlers/analysis_handlers.rs

use crate::error::AnalysisError;
use crate::profile_analysis::ProfileAnalysisService;
use crate::types::AnalysisResult;
use crate::web::types::{AnalyzeRequest, StandardErrorResponse};

use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

pub async fn analyze_profile_handler(
    request: Json<AnalyzeRequest>,
    service: &State<ProfileAnalysisService>,
) -> Result<Json<AnalysisResult>, Custom<Json<StandardErrorResponse>>> {
    let profile_url = request.linkedin_url.trim();

    if profile_url.is_empty() {
        return Err(Custom(
            Status::BadRequest,
            Json(StandardErrorResponse::new(
                "linkedinUrl is required".to_string(),
                "MISSING_PROFILE_URL".to_string(),
                vec!["Provide the public LinkedIn profile URL to analyze".to_string()],
            )),
        ));
    }

    info!("Analyzing profile: {}", profile_url);

    match service.analyze_url(profile_url).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            error!("Profile analysis failed for {}: {}", profile_url, e);
            let (error_code, suggestions) = categorize_error(&e);
            Err(Custom(
                Status::InternalServerError,
                Json(StandardErrorResponse::new(
                    "Failed to analyze profile".to_string(),
                    error_code,
                    suggestions,
                )),
            ))
        }
    }
}

fn categorize_error(error: &AnalysisError) -> (String, Vec<String>) {
    match error {
        AnalysisError::ProfileFetch(_) => (
            "PROFILE_FETCH_ERROR".to_string(),
            vec![
                "Verify the LinkedIn profile URL is public and correct".to_string(),
                "Try again in a few moments".to_string(),
                "Contact support if the problem persists".to_string(),
            ],
        ),
    }
}
