use crate::error::{ApiError, StatusBody};
use crate::AppState;
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

pub const HEALTH_MESSAGE: &str = "Server is healthy 🚀";
pub const GREETING_MESSAGE: &str = "Hello from the Backend 👋";

#[derive(Debug, Serialize, Deserialize)]
pub struct GreetingBody {
    pub message: String,
}

pub fn system_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api", get(api_root_handler))
}

async fn health_handler() -> Json<StatusBody> {
    Json(StatusBody {
        success: true,
        message: HEALTH_MESSAGE.to_string(),
    })
}

async fn api_root_handler() -> Json<GreetingBody> {
    Json(GreetingBody {
        message: GREETING_MESSAGE.to_string(),
    })
}

pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}
