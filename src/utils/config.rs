use crate::types::{AppError, Result};
use serde::Serialize;
use std::env;
use std::fmt::Display;
use std::str::FromStr;

pub const DEFAULT_MODEL_URL: &str = "https://your-model-endpoint.com/api/predict";
pub const DEFAULT_MODEL_API_KEY: &str = "your-api-key-here";
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// External model endpoint and the generation settings sent with each call.
#[derive(Debug, Clone, Serialize)]
pub struct ModelConfig {
    pub url: String,
    #[serde(serialize_with = "serialize_redacted")]
    pub api_key: String,
    pub timeout_secs: u64,
    pub health_check_timeout_secs: u64,
    pub max_tokens: u32,
    pub temperature: f64,
    pub history_window: usize,
}

impl ModelConfig {
    /// Whether the credential is still the documented placeholder.
    pub fn uses_placeholder_key(&self) -> bool {
        self.api_key == DEFAULT_MODEL_API_KEY
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                log_level: "info".to_string(),
                log_format: LogFormat::Pretty,
            },
            model: ModelConfig {
                url: DEFAULT_MODEL_URL.to_string(),
                api_key: DEFAULT_MODEL_API_KEY.to_string(),
                timeout_secs: 30,
                health_check_timeout_secs: 10,
                max_tokens: 500,
                temperature: 0.7,
                history_window: 6,
            },
            cors: CorsConfig {
                allowed_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
            },
        }
    }
}

impl Config {
    /// Load configuration from the process environment, reading `.env` first.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unset keys fall back
    /// to the defaults; set but unparsable keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Config {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or(defaults.server.host),
                port: parse_or(&lookup, "PORT", defaults.server.port)?,
                log_level: lookup("LOG_LEVEL").unwrap_or(defaults.server.log_level),
                log_format: parse_or(&lookup, "LOG_FORMAT", defaults.server.log_format)?,
            },
            model: ModelConfig {
                url: lookup("CUSTOM_MODEL_URL").unwrap_or(defaults.model.url),
                api_key: lookup("CUSTOM_MODEL_API_KEY").unwrap_or(defaults.model.api_key),
                timeout_secs: parse_or(&lookup, "MODEL_TIMEOUT_SECS", defaults.model.timeout_secs)?,
                health_check_timeout_secs: parse_or(
                    &lookup,
                    "HEALTH_CHECK_TIMEOUT_SECS",
                    defaults.model.health_check_timeout_secs,
                )?,
                max_tokens: parse_or(&lookup, "MODEL_MAX_TOKENS", defaults.model.max_tokens)?,
                temperature: parse_or(&lookup, "MODEL_TEMPERATURE", defaults.model.temperature)?,
                history_window: parse_or(&lookup, "HISTORY_WINDOW", defaults.model.history_window)?,
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ORIGINS")
                    .map(|raw| split_origins(&raw))
                    .unwrap_or(defaults.cors.allowed_origins),
            },
        })
    }

    /// Socket address string the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("invalid value for {}: {} ({})", key, raw, e))),
        None => Ok(default),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

fn serialize_redacted<S: serde::Serializer>(value: &str, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    let redacted = match value.len() {
        0 => String::new(),
        n if n <= 8 => "****".to_string(),
        _ => format!("{}****", value.chars().take(4).collect::<String>()),
    };
    serializer.serialize_str(&redacted)
}
