//! Configuration Module
//!
//! Endpoint resolution, provider options and config file loading.

pub mod endpoint;
pub mod loader;
pub mod provider;

pub use endpoint::{Endpoint, DEFAULT_ENDPOINT, ENDPOINT_ENV};
pub use loader::ConfigLoader;
pub use provider::{
    ApiKeys, ProviderConf, ProviderOptions, DEFAULT_API_KEYS, DEFAULT_TIMEOUT,
};
