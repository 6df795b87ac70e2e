//! Tron HTTP Error Types
//!
//! Error handling for the provider, transport and configuration layers.

/// Main error type for provider operations
#[derive(Debug, thiserror::Error)]
pub enum TronError {
    /// Configuration errors (bad endpoint value, invalid URL, unreadable config file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Key auth is enabled but the pool holds no keys
    #[error("No API keys available for {0}. Pass api keys in ProviderOptions")]
    NoKeysAvailable(String),

    /// Non-2xx response that is not a recoverable rate limit
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// Still rate limited after the retry bound was reached
    #[error("Rate limited after {attempts} attempts. Consider adding more API keys for rotation.")]
    RateLimited { attempts: u32 },

    /// HTTP request failed before a response arrived
    #[error("Request failed: {0}")]
    Request(String),

    /// Response parsing failed
    #[error("Response error: {0}")]
    Response(String),

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

impl TronError {
    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            TronError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TronError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TronError::Timeout(err.to_string())
        } else if err.is_connect() {
            TronError::Request(format!("Connection failed: {}", err))
        } else if err.is_decode() {
            TronError::Response(format!("Failed to decode response: {}", err))
        } else {
            TronError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TronError {
    fn from(err: serde_json::Error) -> Self {
        TronError::Response(format!("JSON parsing error: {}", err))
    }
}

impl From<std::io::Error> for TronError {
    fn from(err: std::io::Error) -> Self {
        TronError::Config(format!("IO error: {}", err))
    }
}

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, TronError>;
