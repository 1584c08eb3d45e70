//! # Better Health AI
//!
//! A healthcare chat assistant server. Messages from the UI are relayed to a
//! hosted model (or answered by a keyword mock), and the Leptos UI can be
//! embedded into the same binary.
//!
//! ## Overview
//!
//! Better Health can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `better-health-server` binary
//! 2. **As a library** - Build the router around your own [`ModelClient`]
//!
//! ### Basic Example
//!
//! ```rust,ignore
//! use better_health::{api, utils::Config, AppState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let state = AppState::new(config)?;
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//!     axum::serve(listener, api::create_app(state)).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `ui` | Embed `ui/dist` and serve it as the router fallback |
//! | `swagger-ui` | Swagger UI at `/api/docs` |
//! | `full` | Both of the above |
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`llm`] - Outbound client for the hosted model
//! - [`relay`] - Payload building, reply extraction, mock replies
//! - [`types`] - Request/response types and errors
//! - [`utils`] - Environment configuration

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Command-line interface.
pub mod cli;
/// Client for the hosted model.
pub mod llm;
/// Chat relay and mock model.
pub mod relay;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

pub use llm::{HttpModelClient, ModelClient};
pub use relay::{RelayService, RelaySettings};
pub use types::{AppError, Result};
pub use utils::Config;

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Resolved configuration
    pub config: Arc<Config>,
    /// Relay to the hosted model
    pub relay: Arc<RelayService>,
}

impl AppState {
    /// State backed by the `reqwest` client for the configured model URL.
    pub fn new(config: Config) -> Result<Self> {
        let client = HttpModelClient::from_config(&config.model)?;
        Ok(Self::with_client(config, Arc::new(client)))
    }

    /// State backed by any [`ModelClient`].
    pub fn with_client(config: Config, client: Arc<dyn ModelClient>) -> Self {
        let relay = RelayService::new(client, RelaySettings::from(&config.model));

        Self {
            config: Arc::new(config),
            relay: Arc::new(relay),
        }
    }
}
