use crate::api::handlers::{ai, status};
use crate::types::{
    AiServiceState, ApiStatus, ChatRequest, ChatResponse, ErrorDetail, HealthReport, HealthStatus,
    HistoryEntry, HomeInfo, MessageRole, ServiceHealth,
};
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Better Health AI",
        description = "Healthcare chat assistant relaying conversations to a hosted model"
    ),
    paths(
        ai::chat,
        ai::chat_custom,
        ai::chat_mock,
        ai::health_check,
        status::root,
        status::health,
        status::home,
    ),
    components(schemas(
        ChatRequest,
        ChatResponse,
        HistoryEntry,
        MessageRole,
        HealthReport,
        HealthStatus,
        AiServiceState,
        ApiStatus,
        ServiceHealth,
        HomeInfo,
        ErrorDetail,
    )),
    tags(
        (name = "ai", description = "Model relay and mock replies"),
        (name = "status", description = "Service status")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(feature = "swagger-ui")]
pub fn swagger_ui() -> axum::Router<crate::AppState> {
    utoipa_swagger_ui::SwaggerUi::new("/api/docs")
        .url("/api/docs/openapi.json", ApiDoc::openapi())
        .into()
}
