use crate::api::handlers::{ai, status};
use crate::types::{AppError, ErrorDetail};
use crate::utils::config::CorsConfig;
use crate::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Relay endpoints, nested under `/ai` by [`create_app`].
pub fn ai_routes() -> Router<AppState> {
    Router::new()
        .route("/chat", post(ai::chat))
        .route("/chat/custom", post(ai::chat_custom))
        .route("/chat/mock", post(ai::chat_mock))
        .route("/health-check", get(ai::health_check))
}

/// Status and documentation endpoints under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/", get(status::root))
        .route("/api/health", get(status::health))
        .route("/api/home", get(status::home))
        .route("/api/openapi.json", get(crate::api::docs::openapi_json))
}

/// Full application: routes, CORS, tracing, panic handling and the fallback.
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);

    let router = Router::new()
        .nest("/ai", ai_routes())
        .merge(api_routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(crate::api::docs::swagger_ui());

    #[cfg(feature = "ui")]
    let router = router.fallback(crate::api::ui::static_handler);

    #[cfg(not(feature = "ui"))]
    let router = router.fallback(not_found);

    with_layers(router, cors).with_state(state)
}

/// Middleware stack shared by every route, outermost last.
fn with_layers(router: Router<AppState>, cors: CorsLayer) -> Router<AppState> {
    router
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Restrict origins to the configured list; methods and headers mirror the
/// request since wildcards are rejected alongside credentials.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[cfg_attr(feature = "ui", allow(dead_code))]
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDetail {
            detail: "Not Found".to_string(),
        }),
    )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!(panic = %detail, "Handler panicked");
    AppError::Internal(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_panic_becomes_internal_error_body() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "An internal server error occurred");
        assert_eq!(body["error"], "Internal error: boom");
    }

    async fn explode() -> &'static str {
        panic!("kaboom")
    }

    #[tokio::test]
    async fn test_panicking_route_answers_500_through_middleware() {
        let config = crate::utils::Config::default();
        let client = crate::llm::HttpModelClient::from_config(&config.model).unwrap();
        let state = AppState::with_client(config, std::sync::Arc::new(client));
        let cors = cors_layer(&state.config.cors);

        let router = Router::new().route("/explode", get(explode));
        let server = axum_test::TestServer::new(with_layers(router, cors).with_state(state)).unwrap();

        let response = server.get("/explode").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&serde_json::json!({
            "message": "An internal server error occurred",
            "error": "Internal error: kaboom"
        }));
    }

    #[test]
    fn test_panic_with_owned_message() {
        let response = handle_panic(Box::new(String::from("owned")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
