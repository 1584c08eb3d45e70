use crate::types::{ApiStatus, HomeInfo, ServiceHealth};
use axum::Json;

const HOME_FEATURES: [&str; 4] = [
    "AI Health Assistant",
    "Secure Authentication",
    "Conversation History",
    "Medical Context Awareness",
];

/// API root
#[utoipa::path(
    get,
    path = "/api/",
    responses((status = 200, description = "API is up", body = ApiStatus)),
    tag = "status"
)]
pub async fn root() -> Json<ApiStatus> {
    Json(ApiStatus {
        message: "Health AI Assistant API".to_string(),
        status: "healthy".to_string(),
    })
}

/// Service health
#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service health", body = ServiceHealth)),
    tag = "status"
)]
pub async fn health() -> Json<ServiceHealth> {
    Json(ServiceHealth {
        status: "healthy".to_string(),
        service: "Health AI Backend".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Landing page summary
#[utoipa::path(
    get,
    path = "/api/home",
    responses((status = 200, description = "Welcome message and feature list", body = HomeInfo)),
    tag = "status"
)]
pub async fn home() -> Json<HomeInfo> {
    Json(HomeInfo {
        message: "Welcome to Health AI 👋".to_string(),
        features: HOME_FEATURES.iter().map(|f| f.to_string()).collect(),
    })
}
