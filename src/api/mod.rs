//! HTTP API Handlers and Routes
//!
//! The REST surface of Better Health, built on Axum.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Request handlers for each endpoint
//! - [`api::routes`](crate::api::routes) - Router, CORS and middleware
//! - [`api::docs`](crate::api::docs) - OpenAPI document
//!
//! # API Endpoints
//!
//! ## AI (`/ai`)
//! - `POST /ai/chat` - Relay to the hosted model (flat payload)
//! - `POST /ai/chat/custom` - Relay with a chat-completions payload; always 200
//! - `POST /ai/chat/mock` - Keyword-matched canned reply
//! - `GET /ai/health-check` - Probe the hosted model
//!
//! ## Status (`/api`)
//! - `GET /api/` - API root
//! - `GET /api/health` - Service health
//! - `GET /api/home` - Welcome message and feature list
//! - `GET /api/openapi.json` - OpenAPI document
//!
//! # Errors
//!
//! Relay failures that propagate answer with `{"detail": "..."}` and the
//! mapped status (408, 503, or the model's own status). A panic anywhere in
//! a handler answers 500 with `{"message", "error"}`.
//!
//! # OpenAPI Documentation
//!
//! When the `swagger-ui` feature is enabled, interactive API documentation
//! is available at `/api/docs`.

/// OpenAPI document and Swagger UI.
pub mod docs;
/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;
/// Embedded UI assets.
#[cfg(feature = "ui")]
pub mod ui;

pub use routes::create_app;
