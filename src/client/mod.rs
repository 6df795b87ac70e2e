//! Client Module
//!
//! HTTP session and rate limit detection.

pub mod http;
#[cfg(test)]
pub(crate) mod mock;
pub mod rate_limiter;

pub use http::{HttpTransport, RawResponse, Transport, USER_AGENT};
pub use rate_limiter::{is_rate_limit_error, RATE_LIMIT_MARKER};
