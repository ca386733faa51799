// src/web/handlers/system_handlers.rs
use crate::web::types::TextResponse;

use rocket::serde::json::Json;

pub async fn health_handler() -> Json<TextResponse> {
    Json(TextResponse::success(format!(
        "Profile analyzer {} is running",
        env!("CARGO_PKG_VERSION")
    )))
}
