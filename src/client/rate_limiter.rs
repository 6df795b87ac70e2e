//! Rate Limit Detection
//!
//! Recognizes the managed endpoint's daily-quota response.

use reqwest::StatusCode;

/// Body substring marking a key's exhausted daily quota
pub const RATE_LIMIT_MARKER: &str = "Exceed the user daily usage";

/// Detect if a response indicates an exhausted key quota
pub fn is_rate_limit_error(status: StatusCode, body: &str) -> bool {
    status == StatusCode::FORBIDDEN && body.contains(RATE_LIMIT_MARKER)
}

/// Server-provided reason from a rate-limit body, or a generic one
pub fn rate_limit_reason(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("Error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| "rate limit!".to_string())
}
