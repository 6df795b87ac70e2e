//! tron-http - HTTP provider for the TRON full node API
//!
//! Posts JSON to full node methods, rotates managed-endpoint API keys and
//! recovers from exhausted daily quotas by dropping keys or pausing.
//!
//! ```no_run
//! use tron_http::{HttpProvider, ProviderOptions};
//!
//! # async fn run() -> tron_http::Result<()> {
//! let provider = HttpProvider::new(
//!     Some("https://api.trongrid.io/".into()),
//!     ProviderOptions::default().with_api_key(vec!["key-a", "key-b"]),
//! )?;
//! let block = provider.make_request("wallet/getnowblock", None).await?;
//! # Ok(())
//! # }
//! ```

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::Url;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod router;

use client::rate_limiter::rate_limit_reason;
use client::{is_rate_limit_error, HttpTransport, Transport};
pub use config::{ApiKeys, Endpoint, ProviderConf, ProviderOptions};
use config::ConfigLoader;
pub use error::{Result, TronError};
use router::{method_url, KeyPool, Removal};

/// Header carrying the managed-endpoint API key
pub const API_KEY_HEADER: &str = "tron-pro-api-key";

/// HTTP provider for full node API requests.
///
/// Key rotation state lives behind a mutex, so a provider can be shared via
/// `Arc`; concurrent rate-limit recovery is not coordinated beyond that.
pub struct HttpProvider<T = HttpTransport> {
    /// Base URL method paths are joined to
    endpoint: Url,

    /// Per-request timeout
    timeout: Duration,

    /// Keys for managed endpoints; `None` disables key auth
    key_pool: Option<KeyPool>,

    /// Bearer token credentials
    jw_token: Option<String>,

    /// Pause when the last key is rate limited
    rate_limit_pause: Duration,

    /// Retry bound for rate-limited requests
    max_rate_limit_retries: u32,

    transport: T,
}

impl HttpProvider {
    /// Create a provider backed by a fresh HTTP session
    pub fn new(endpoint: Option<Endpoint>, options: ProviderOptions) -> Result<Self> {
        let transport = HttpTransport::new(options.timeout)?;
        Self::with_transport(endpoint, options, transport)
    }

    /// Create a provider from a structured conf
    pub fn from_conf(conf: ProviderConf) -> Result<Self> {
        let options = ProviderOptions::from_conf(&conf)?;
        Self::new(Some(Endpoint::Conf(conf)), options)
    }

    /// Create a provider from a JSON config file
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_conf(ConfigLoader::from_path(path)?)
    }

    /// Create a provider from the first config file found, or the environment
    pub fn discover() -> Result<Self> {
        match ConfigLoader::discover()? {
            Some(conf) => Self::from_conf(conf),
            None => Self::new(None, ProviderOptions::default()),
        }
    }
}

impl<T: Transport> HttpProvider<T> {
    /// Create a provider over a custom transport
    pub fn with_transport(
        endpoint: Option<Endpoint>,
        options: ProviderOptions,
        transport: T,
    ) -> Result<Self> {
        if options.timeout.is_zero() {
            return Err(TronError::Config("timeout must be positive".to_string()));
        }

        let endpoint = config::endpoint::resolve(endpoint.as_ref())?;

        let key_pool = match endpoint.host_str() {
            Some(host) if options.is_managed_host(host) => {
                Some(KeyPool::new(options.resolve_api_keys()))
            }
            _ => None,
        };

        debug!(
            endpoint = %endpoint,
            api_keys = key_pool.as_ref().map(KeyPool::len).unwrap_or(0),
            "http provider ready"
        );

        Ok(Self {
            endpoint,
            timeout: options.timeout,
            key_pool,
            jw_token: options.jw_token,
            rate_limit_pause: options.rate_limit_pause,
            max_rate_limit_retries: options.max_rate_limit_retries,
            transport,
        })
    }

    /// Resolved base URL
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Key pool, when key auth is enabled
    pub fn key_pool(&self) -> Option<&KeyPool> {
        self.key_pool.as_ref()
    }

    /// Whether requests carry an API key header
    pub fn uses_api_key(&self) -> bool {
        self.key_pool.is_some()
    }

    /// POST `params` (default `{}`) to `method` and decode the JSON response
    pub async fn make_request(&self, method: &str, params: Option<Value>) -> Result<Value> {
        let params = params.unwrap_or_else(|| Value::Object(Default::default()));
        let url = method_url(&self.endpoint, method)?;
        let mut attempts = 0u32;

        loop {
            let (headers, api_key) = self.request_headers()?;
            debug!(method, url = %url, attempt = attempts, "posting request");

            let resp = self
                .transport
                .post_json(url.clone(), headers, &params, self.timeout)
                .await?;

            if let (Some(pool), Some(api_key)) = (&self.key_pool, api_key.as_deref()) {
                if is_rate_limit_error(resp.status, &resp.body) {
                    if attempts >= self.max_rate_limit_retries {
                        return Err(TronError::RateLimited {
                            attempts: attempts + 1,
                        });
                    }
                    attempts += 1;

                    warn!(method, reason = %rate_limit_reason(&resp.body), "API key rate limited");
                    self.handle_rate_limit(pool, api_key).await;
                    continue;
                }
            }

            if !resp.status.is_success() {
                return Err(TronError::Http {
                    status: resp.status.as_u16(),
                    body: resp.body,
                });
            }

            return serde_json::from_str(&resp.body).map_err(|e| {
                TronError::Response(format!(
                    "Failed to parse response: {}. Body: {}",
                    e,
                    resp.body.chars().take(500).collect::<String>()
                ))
            });
        }
    }

    /// Headers for one attempt, plus the API key chosen for it
    fn request_headers(&self) -> Result<(HeaderMap, Option<String>)> {
        let mut headers = HeaderMap::new();

        let api_key = match &self.key_pool {
            Some(pool) => {
                let key = pool
                    .choose()
                    .ok_or_else(|| TronError::NoKeysAvailable(self.endpoint.to_string()))?;
                headers.insert(
                    HeaderName::from_static(API_KEY_HEADER),
                    HeaderValue::from_str(&key)
                        .map_err(|e| TronError::Config(format!("Invalid API key format: {}", e)))?,
                );
                Some(key)
            }
            None => None,
        };

        if let Some(token) = &self.jw_token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| TronError::Config(format!("Invalid token format: {}", e)))?,
            );
        }

        Ok((headers, api_key))
    }

    /// Drop the exhausted key, or pause when it is the last one
    async fn handle_rate_limit(&self, pool: &KeyPool, api_key: &str) {
        match pool.remove_unless_last(api_key) {
            Removal::Removed => {
                debug!(remaining = pool.len(), "dropped rate-limited API key");
            }
            Removal::KeptLast => {
                warn!("Only one API key left, add more API keys to HttpProvider");
                tokio::time::sleep(self.rate_limit_pause).await;
            }
            Removal::NotFound => {}
        }
    }
}
