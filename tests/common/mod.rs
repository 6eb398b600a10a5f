#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use bedrock_summarizer::SummarizeError;
use bedrock_summarizer::ai::InferenceClient;

/// One recorded `invoke` call.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub body: String,
    pub model_id: String,
    pub accept: String,
    pub content_type: String,
}

/// Inference client that returns a canned response and records its calls.
pub struct MockClient {
    response: Result<Vec<u8>, String>,
    pub calls: Mutex<Vec<Invocation>>,
}

impl MockClient {
    pub fn responding(body: &str) -> Self {
        Self {
            response: Ok(body.as_bytes().to_vec()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for MockClient {
    async fn invoke(
        &self,
        body: Vec<u8>,
        model_id: &str,
        accept: &str,
        content_type: &str,
    ) -> Result<Vec<u8>, SummarizeError> {
        self.calls.lock().unwrap().push(Invocation {
            body: String::from_utf8(body).unwrap(),
            model_id: model_id.to_string(),
            accept: accept.to_string(),
            content_type: content_type.to_string(),
        });
        self.response
            .clone()
            .map_err(SummarizeError::Transport)
    }
}
