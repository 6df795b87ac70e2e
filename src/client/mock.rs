//! Scripted transport for provider tests.

use super::http::{RawResponse, Transport};
use crate::error::{Result, TronError};
use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::header::HeaderMap;
use reqwest::Url;
use serde_json::Value;
use std::collections::VecDeque;
use std::time::Duration;

/// A request as seen by the transport
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Value,
}

impl RecordedCall {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Replays queued responses in order and records every call
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<RawResponse>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new(responses: impl IntoIterator<Item = RawResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn post_json(
        &self,
        url: Url,
        headers: HeaderMap,
        body: &Value,
        _timeout: Duration,
    ) -> Result<RawResponse> {
        self.calls.lock().push(RecordedCall {
            url,
            headers,
            body: body.clone(),
        });
        self.responses
            .lock()
            .pop_front()
            .ok_or_else(|| TronError::Request("script exhausted".to_string()))
    }
}
