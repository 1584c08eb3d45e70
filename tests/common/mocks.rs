//! Mock model clients for testing.
//!
//! [`ScriptedModelClient`] replays a fixed list of outcomes, one per call,
//! and records every payload it was sent.

use async_trait::async_trait;
use better_health::llm::{ModelClient, RemoteResponse, TransportError};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

pub struct ScriptedModelClient {
    outcomes: Mutex<VecDeque<Result<RemoteResponse, TransportError>>>,
    payloads: Mutex<Vec<Value>>,
    timeouts: Mutex<Vec<Duration>>,
}

impl ScriptedModelClient {
    pub fn new(outcomes: Vec<Result<RemoteResponse, TransportError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            payloads: Mutex::new(Vec::new()),
            timeouts: Mutex::new(Vec::new()),
        }
    }

    /// Always answers 200 with `body`.
    pub fn replying(body: Value) -> Self {
        Self::new(vec![Ok(RemoteResponse::new(200, body.to_string()))])
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self::new(vec![Ok(RemoteResponse::new(status, body))])
    }

    pub fn failing(err: TransportError) -> Self {
        Self::new(vec![Err(err)])
    }

    pub fn payloads(&self) -> Vec<Value> {
        self.payloads.lock().unwrap().clone()
    }

    pub fn timeouts(&self) -> Vec<Duration> {
        self.timeouts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClient for ScriptedModelClient {
    async fn post_json(
        &self,
        payload: &Value,
        timeout: Duration,
    ) -> Result<RemoteResponse, TransportError> {
        self.payloads.lock().unwrap().push(payload.clone());
        self.timeouts.lock().unwrap().push(timeout);

        let mut outcomes = self.outcomes.lock().unwrap();
        // The last outcome repeats once the script runs out.
        if outcomes.len() > 1 {
            outcomes.pop_front().unwrap()
        } else {
            outcomes
                .front()
                .cloned()
                .unwrap_or_else(|| Err(TransportError::Other("script exhausted".to_string())))
        }
    }

    fn endpoint(&self) -> &str {
        "http://scripted.model/predict"
    }
}
