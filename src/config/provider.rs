//! Provider Configuration
//!
//! Defines the configuration schema for the HTTP provider.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Keys used for managed endpoints when the caller supplies none
pub const DEFAULT_API_KEYS: &[&str] = &["999fb9e3-49f0-434d-9839-e2ef58a76d76"];

/// Host markers of managed API providers that require key auth
pub const DEFAULT_MANAGED_HOSTS: &[&str] = &["trongrid"];

/// Pause before retrying when the last remaining key is rate limited
pub const DEFAULT_RATE_LIMIT_PAUSE: Duration = Duration::from_millis(900);

/// Consecutive rate-limited responses tolerated before giving up
pub const DEFAULT_MAX_RATE_LIMIT_RETRIES: u32 = 16;

/// Structured endpoint configuration, as found in config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConf {
    /// Full node HTTP API base URL
    pub fullnode: String,

    /// Event server URL (carried through, not used for requests)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,

    /// Request timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<f64>,

    /// API key(s) for managed endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<ApiKeys>,

    /// Bearer token credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jw_token: Option<String>,
}

impl ProviderConf {
    /// Create a conf pointing at a full node
    pub fn new(fullnode: impl Into<String>) -> Self {
        Self {
            fullnode: fullnode.into(),
            event: None,
            timeout: None,
            api_key: None,
            jw_token: None,
        }
    }
}

/// API key input: a single key or a list of keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiKeys {
    One(String),
    Many(Vec<String>),
}

impl ApiKeys {
    /// Normalize into a key list. An empty list yields `None`.
    pub fn into_keys(self) -> Option<Vec<String>> {
        match self {
            ApiKeys::One(key) => Some(vec![key]),
            ApiKeys::Many(keys) if keys.is_empty() => None,
            ApiKeys::Many(keys) => Some(keys),
        }
    }
}

impl From<&str> for ApiKeys {
    fn from(key: &str) -> Self {
        ApiKeys::One(key.to_string())
    }
}

impl From<String> for ApiKeys {
    fn from(key: String) -> Self {
        ApiKeys::One(key)
    }
}

impl From<Vec<String>> for ApiKeys {
    fn from(keys: Vec<String>) -> Self {
        ApiKeys::Many(keys)
    }
}

impl From<Vec<&str>> for ApiKeys {
    fn from(keys: Vec<&str>) -> Self {
        ApiKeys::Many(keys.into_iter().map(str::to_string).collect())
    }
}

/// Options for constructing an [`HttpProvider`](crate::HttpProvider)
#[derive(Debug, Clone)]
pub struct ProviderOptions {
    /// Per-request timeout
    pub timeout: Duration,

    /// Caller-supplied API key(s)
    pub api_key: Option<ApiKeys>,

    /// Bearer token sent as `Authorization: Bearer <token>`
    pub jw_token: Option<String>,

    /// Keys used when key auth is enabled but none were supplied
    pub fallback_api_keys: Vec<String>,

    /// Host substrings that enable key auth
    pub managed_hosts: Vec<String>,

    /// Pause applied when the last key is rate limited
    pub rate_limit_pause: Duration,

    /// Retry bound for rate-limited requests
    pub max_rate_limit_retries: u32,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            api_key: None,
            jw_token: None,
            fallback_api_keys: DEFAULT_API_KEYS.iter().map(|k| k.to_string()).collect(),
            managed_hosts: DEFAULT_MANAGED_HOSTS.iter().map(|h| h.to_string()).collect(),
            rate_limit_pause: DEFAULT_RATE_LIMIT_PAUSE,
            max_rate_limit_retries: DEFAULT_MAX_RATE_LIMIT_RETRIES,
        }
    }
}

impl ProviderOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<ApiKeys>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_jw_token(mut self, token: impl Into<String>) -> Self {
        self.jw_token = Some(token.into());
        self
    }

    /// Build options from the non-endpoint fields of a conf
    pub fn from_conf(conf: &ProviderConf) -> crate::error::Result<Self> {
        let mut options = Self {
            api_key: conf.api_key.clone(),
            jw_token: conf.jw_token.clone(),
            ..Self::default()
        };
        if let Some(secs) = conf.timeout {
            options.timeout = timeout_from_secs(secs)?;
        }
        Ok(options)
    }

    /// Whether `host` belongs to a managed API provider
    pub fn is_managed_host(&self, host: &str) -> bool {
        self.managed_hosts
            .iter()
            .any(|marker| host.contains(marker.as_str()))
    }

    /// Keys for the pool: caller keys when present, otherwise the fallback list
    pub fn resolve_api_keys(&self) -> Vec<String> {
        self.api_key
            .clone()
            .and_then(ApiKeys::into_keys)
            .unwrap_or_else(|| self.fallback_api_keys.clone())
    }
}

/// Convert a timeout in seconds, rejecting non-positive and non-finite values
pub fn timeout_from_secs(secs: f64) -> crate::error::Result<Duration> {
    if !secs.is_finite() || secs <= 0.0 {
        return Err(crate::error::TronError::Config(format!(
            "timeout must be a positive number of seconds, got {}",
            secs
        )));
    }
    Duration::try_from_secs_f64(secs).map_err(|e| {
        crate::error::TronError::Config(format!("timeout of {} seconds is out of range: {}", secs, e))
    })
}
