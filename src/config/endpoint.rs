//! Endpoint Resolution
//!
//! Resolves the base URL from an explicit value, a structured conf, the
//! environment, or the built-in default.

use crate::config::provider::ProviderConf;
use crate::error::{Result, TronError};
use reqwest::Url;
use serde_json::Value;

/// Base URL used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "https://api.trongrid.io/";

/// Environment variable consulted when no endpoint is given
pub const ENDPOINT_ENV: &str = "TRONPY_HTTP_PROVIDER_URI";

/// An explicitly supplied endpoint
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    /// Plain base URL
    Uri(String),

    /// Structured conf; its `fullnode` field is the base URL
    Conf(ProviderConf),
}

impl Endpoint {
    /// The raw base URL string this endpoint names
    pub fn uri(&self) -> &str {
        match self {
            Endpoint::Uri(uri) => uri,
            Endpoint::Conf(conf) => &conf.fullnode,
        }
    }
}

impl From<&str> for Endpoint {
    fn from(uri: &str) -> Self {
        Endpoint::Uri(uri.to_string())
    }
}

impl From<String> for Endpoint {
    fn from(uri: String) -> Self {
        Endpoint::Uri(uri)
    }
}

impl From<ProviderConf> for Endpoint {
    fn from(conf: ProviderConf) -> Self {
        Endpoint::Conf(conf)
    }
}

impl TryFrom<Value> for Endpoint {
    type Error = TronError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(uri) => Ok(Endpoint::Uri(uri)),
            Value::Object(_) => {
                let conf: ProviderConf = serde_json::from_value(value).map_err(|e| {
                    TronError::Config(format!("invalid endpoint conf: {}", e))
                })?;
                Ok(Endpoint::Conf(conf))
            }
            other => Err(TronError::Config(format!("unknown endpoint uri {}", other))),
        }
    }
}

/// Resolve the base URL, reading `TRONPY_HTTP_PROVIDER_URI` (and `.env`) as fallback
pub fn resolve(endpoint: Option<&Endpoint>) -> Result<Url> {
    if endpoint.is_none() {
        // Load .env file if present
        let _ = dotenvy::dotenv();
    }
    resolve_with_env(endpoint, std::env::var(ENDPOINT_ENV).ok())
}

/// Resolve the base URL against an explicit environment value
pub fn resolve_with_env(endpoint: Option<&Endpoint>, env_uri: Option<String>) -> Result<Url> {
    let raw = match endpoint {
        Some(endpoint) => endpoint.uri().to_string(),
        None => env_uri.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
    };

    Url::parse(&raw).map_err(|e| TronError::Config(format!("invalid endpoint uri '{}': {}", raw, e)))
}
