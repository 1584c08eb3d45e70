//! External Model Client
//!
//! The hosted model is an opaque HTTP service: one JSON POST in, one
//! status + body out. This module hides the transport behind
//! [`ModelClient`] so the relay only ever sees [`RemoteResponse`] or a
//! classified [`TransportError`].
//!
//! # Example
//!
//! ```ignore
//! use better_health::llm::{HttpModelClient, ModelClient};
//! use std::time::Duration;
//!
//! let client = HttpModelClient::new("http://localhost:9000/predict", "key")?;
//! let reply = client
//!     .post_json(&serde_json::json!({"message": "hi"}), Duration::from_secs(30))
//!     .await?;
//! println!("{} {}", reply.status, reply.body);
//! ```

/// Client trait, response and transport error types.
pub mod client;
/// `reqwest` implementation of the client trait.
pub mod http;

pub use client::{ModelClient, RemoteResponse, TransportError};
pub use http::HttpModelClient;
