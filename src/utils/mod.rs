//! Configuration utilities.
//!
//! Everything is read from the environment (optionally seeded from `.env`);
//! see [`config::Config::from_env`] for the recognised keys.

/// Environment-based configuration.
pub mod config;

pub use config::Config;
