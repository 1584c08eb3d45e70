//! Chat Relay
//!
//! Turns a [`ChatRequest`](crate::types::ChatRequest) into one call to the
//! hosted model and its reply (or failure) back into this service's response
//! shape.
//!
//! - [`prompt`] builds the outbound payloads (flat, chat-completions, probe).
//! - [`extract`] pulls reply fields out of whatever schema comes back.
//! - [`mock`] answers without any outbound call.
//! - [`service`] owns the client, the timeouts and the error policy.

pub mod extract;
pub mod mock;
pub mod prompt;
pub mod service;

pub use service::{RelayService, RelaySettings};
