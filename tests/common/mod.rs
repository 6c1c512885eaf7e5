// Shared test doubles
// Author: kelexine (https://github.com/kelexine)

#![allow(dead_code)]

use async_trait::async_trait;
use gemini_relay::error::{RelayError, Result};
use gemini_relay::gemini::{ModelClient, ModelHandle};
use gemini_relay::models::GenerateContentResponse;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// What the fake model answers with.
pub enum Reply {
    Body(Value),
    Fail(String),
}

/// In-memory `ModelClient` that records every prompt it receives.
pub struct FakeModel {
    reply: Reply,
    prompts: Mutex<Vec<String>>,
}

impl FakeModel {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn answering(text: &str) -> Arc<Self> {
        Self::new(Reply::Body(json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]
        })))
    }

    pub fn blocking(reason: Option<&str>) -> Arc<Self> {
        let body = match reason {
            Some(r) => json!({"promptFeedback": {"blockReason": r}}),
            None => json!({"candidates": []}),
        };
        Self::new(Reply::Body(body))
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Self::new(Reply::Fail(message.to_string()))
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelClient for FakeModel {
    fn model(&self) -> &str {
        "fake-model"
    }

    async fn generate_content(&self, prompt: &str) -> Result<GenerateContentResponse> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Reply::Body(body) => Ok(serde_json::from_value(body.clone())?),
            Reply::Fail(message) => Err(RelayError::Upstream(message.clone())),
        }
    }
}

pub fn ready(model: &Arc<FakeModel>) -> ModelHandle {
    ModelHandle::Ready(model.clone())
}
