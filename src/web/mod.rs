// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use crate::core::{text_generator_from_config, ConfigManager, ProxycurlClient};
use crate::profile_analysis::{ProfileAnalysisService, ProfileAnalyzer};
use crate::types::AnalysisResult;
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[post("/analyze", data = "<request>")]
pub async fn analyze_profile(
    request: Json<AnalyzeRequest>,
    service: &State<ProfileAnalysisService>,
) -> Result<Json<AnalysisResult>, Custom<Json<StandardErrorResponse>>> {
    handlers::analyze_profile_handler(request, service).await
}

#[get("/health")]
pub async fn health() -> Json<TextResponse> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Send the profile URL as linkedinUrl".to_string(),
        ],
    ))
}

#[rocket::catch(422)]
pub fn unprocessable_entity() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request body".to_string(),
        "BAD_REQUEST".to_string(),
        vec!["Send the profile URL as linkedinUrl".to_string()],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
    ))
}

pub fn build_rocket(
    service: ProfileAnalysisService,
    config: &crate::core::config_manager::ServerConfig,
) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("port", config.port))
        .merge(("address", config.address.clone()));

    rocket::custom(figment)
        .attach(Cors)
        .manage(service)
        .register(
            "/api",
            catchers![bad_request, unprocessable_entity, internal_error],
        )
        .mount("/api", routes![analyze_profile, health, options])
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    let provider = Arc::new(ProxycurlClient::new(&config.profile_source)?);
    let generator = text_generator_from_config(&config.generation)?;
    let analyzer = ProfileAnalyzer::new(
        generator,
        Duration::from_secs(config.generation.timeout_seconds),
    );
    let service = ProfileAnalysisService::new(provider, analyzer);

    info!("Starting profile analyzer API server");
    info!("Server: http://{}:{}", config.server.address, config.server.port);
    info!("Generation model: {}", config.generation.model);

    build_rocket(service, &config.server)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Server failed: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config_manager::ServerConfig;
    use crate::core::{ProfileProvider, TextGenerator};
    use crate::types::Profile;
    use async_trait::async_trait;
    use rocket::local::asynchronous::Client;
    use serde_json::{json, Value};

    struct StubProvider;

    #[async_trait]
    impl ProfileProvider for StubProvider {
        async fn fetch_profile(&self, profile_url: &str) -> anyhow::Result<Profile> {
            if profile_url.contains("missing") {
                anyhow::bail!("404 Not Found");
            }
            Ok(serde_json::from_value(json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "occupation": "Engineer at Analytical Engines",
                "connections": 500,
                "skills": ["Python"]
            }))?)
        }
    }

    struct StubGenerator;

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
            Ok(json!([
                {"title": "A", "details": "a"},
                {"title": "B", "details": "b"},
                {"title": "C", "details": "c"},
                {"title": "D", "details": "d"}
            ])
            .to_string())
        }
    }

    async fn client() -> Client {
        let analyzer = ProfileAnalyzer::new(Arc::new(StubGenerator), Duration::from_secs(5));
        let service = ProfileAnalysisService::new(Arc::new(StubProvider), analyzer);
        Client::tracked(build_rocket(service, &ServerConfig::default()))
            .await
            .expect("valid rocket instance")
    }

    #[rocket::async_test]
    async fn test_analyze_returns_result_json() {
        let client = client().await;
        let response = client
            .post("/api/analyze")
            .json(&json!({"linkedinUrl": "https://www.linkedin.com/in/ada"}))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Origin"),
            Some("*")
        );

        let body: Value = response.into_json().await.expect("json body");
        assert_eq!(body["full_name"], "Ada Lovelace");
        assert_eq!(body["network_size"], "500");
        assert_eq!(body["connections"], 500);
        assert_eq!(body["highlights"].as_array().unwrap().len(), 3);
        assert_eq!(body["improvements"].as_array().unwrap().len(), 4);
        assert!(body["score"].as_u64().unwrap() <= 100);
    }

    #[rocket::async_test]
    async fn test_fetch_failure_returns_generic_error() {
        let client = client().await;
        let response = client
            .post("/api/analyze")
            .json(&json!({"linkedinUrl": "https://www.linkedin.com/in/missing"}))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::InternalServerError);
        let body: Value = response.into_json().await.expect("json body");
        assert_eq!(body["error"], "Failed to analyze profile");
        assert_eq!(body["error_code"], "PROFILE_FETCH_ERROR");
        assert!(body.get("score").is_none());
    }

    #[rocket::async_test]
    async fn test_empty_url_is_rejected() {
        let client = client().await;
        let response = client
            .post("/api/analyze")
            .json(&json!({"linkedinUrl": "   "}))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);
    }

    #[rocket::async_test]
    async fn test_health() {
        let client = client().await;
        let response = client.get("/api/health").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().await.expect("json body");
        assert_eq!(body["success"], true);
        assert_eq!(body["type"], "text");
    }
}
