//! Method Routing
//!
//! Maps API method paths onto the provider's base URL.

use crate::error::{Result, TronError};
use reqwest::Url;

/// Join a method path to the base URL with relative-reference semantics.
///
/// A base without a trailing slash has its last segment replaced:
/// `https://host/api` + `wallet/x` is `https://host/wallet/x`.
pub fn method_url(base: &Url, method: &str) -> Result<Url> {
    base.join(method).map_err(|e| {
        TronError::Config(format!(
            "Invalid method path '{}' for base {}: {}",
            method, base, e
        ))
    })
}
