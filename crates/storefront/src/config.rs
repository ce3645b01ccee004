//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `GEMINI_API_KEY` - API key for the advisory backend
//!
//! ## Optional
//! - `TACWORLD_HOST` - Bind address (default: 127.0.0.1)
//! - `TACWORLD_PORT` - Listen port (default: 3000)
//! - `TACWORLD_BASE_URL` - Public URL (default: `http://localhost:3000`)
//! - `ADVISORY_CHAT_MODEL` - Chat model ID (default: gemini-2.5-flash)
//! - `ADVISORY_IMAGE_MODEL` - Image model ID (default: gemini-2.5-flash-image)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate 0.0-1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Performance sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_CHAT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Advisory backend configuration
    pub advisory: AdvisoryConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

/// Advisory backend configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct AdvisoryConfig {
    /// API key for the generative AI backend
    pub api_key: SecretString,
    /// Model ID for chat completions
    pub chat_model: String,
    /// Model ID for image generation
    pub image_model: String,
}

impl std::fmt::Debug for AdvisoryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvisoryConfig")
            .field("api_key", &"[REDACTED]")
            .field("chat_model", &self.chat_model)
            .field("image_model", &self.image_model)
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a required variable is missing or a
    /// value cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = optional_var("TACWORLD_HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_owned())
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("TACWORLD_HOST".to_owned(), e.to_string()))?;

        let port = match optional_var("TACWORLD_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| {
                ConfigError::InvalidEnvVar("TACWORLD_PORT".to_owned(), e.to_string())
            })?,
            None => DEFAULT_PORT,
        };

        let base_url =
            optional_var("TACWORLD_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());

        let advisory = AdvisoryConfig {
            api_key: SecretString::from(required_var("GEMINI_API_KEY")?),
            chat_model: optional_var("ADVISORY_CHAT_MODEL")
                .unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_owned()),
            image_model: optional_var("ADVISORY_IMAGE_MODEL")
                .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_owned()),
        };

        Ok(Self {
            host,
            port,
            base_url,
            advisory,
            sentry_dsn: optional_var("SENTRY_DSN"),
            sentry_environment: optional_var("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: parse_rate("SENTRY_SAMPLE_RATE", 1.0)?,
            sentry_traces_sample_rate: parse_rate("SENTRY_TRACES_SAMPLE_RATE", 0.0)?,
        })
    }

    /// Socket address to bind the server to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    optional_var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_owned()))
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn parse_rate(name: &str, default: f32) -> Result<f32, ConfigError> {
    match optional_var(name) {
        Some(raw) => {
            let rate = raw
                .parse::<f32>()
                .map_err(|e| ConfigError::InvalidEnvVar(name.to_owned(), e.to_string()))?;
            if (0.0..=1.0).contains(&rate) {
                Ok(rate)
            } else {
                Err(ConfigError::InvalidEnvVar(
                    name.to_owned(),
                    format!("{rate} is outside 0.0..=1.0"),
                ))
            }
        }
        None => Ok(default),
    }
}
