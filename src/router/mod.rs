//! Router Module
//!
//! Handles method URL routing and API key pool management.

pub mod key_pool;
pub mod route;

pub use key_pool::{KeyPool, Removal};
pub use route::method_url;
