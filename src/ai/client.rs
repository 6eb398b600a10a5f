//! Inference client abstraction and the Amazon Bedrock implementation.

use async_trait::async_trait;
use aws_config::Region;
use aws_sdk_bedrockruntime::Client as BedrockRuntimeClient;
use aws_sdk_bedrockruntime::primitives::Blob;
use serde_json::Value;
use tracing::{debug, info};

use crate::core::config::AppConfig;
use crate::errors::SummarizeError;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Remote model invocation, as seen by the summarize operation.
///
/// Implementations own transport concerns. Timeouts, retries and backoff
/// belong here rather than in the operation.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Sends `body` to `model_id` and returns the raw response bytes.
    async fn invoke(
        &self,
        body: Vec<u8>,
        model_id: &str,
        accept: &str,
        content_type: &str,
    ) -> Result<Vec<u8>, SummarizeError>;

    /// Decodes a raw response into JSON.
    fn decode(&self, raw: &[u8]) -> Result<Value, SummarizeError> {
        serde_json::from_slice(raw).map_err(|e| {
            SummarizeError::Transport(format!("Failed to decode model response: {e}"))
        })
    }
}

#[async_trait]
impl<'a, T> InferenceClient for &'a T
where
    T: InferenceClient + ?Sized,
{
    async fn invoke(
        &self,
        body: Vec<u8>,
        model_id: &str,
        accept: &str,
        content_type: &str,
    ) -> Result<Vec<u8>, SummarizeError> {
        (**self).invoke(body, model_id, accept, content_type).await
    }

    fn decode(&self, raw: &[u8]) -> Result<Value, SummarizeError> {
        (**self).decode(raw)
    }
}

/// [`InferenceClient`] backed by the Bedrock runtime `InvokeModel` API.
pub struct BedrockClient {
    client: BedrockRuntimeClient,
}

impl BedrockClient {
    #[must_use]
    pub fn new(client: BedrockRuntimeClient) -> Self {
        Self { client }
    }

    /// Loads AWS configuration, overriding the region when one is configured.
    ///
    /// Credentials come from the SDK default provider chain.
    pub async fn from_config(config: &AppConfig) -> Self {
        let mut loader = aws_config::from_env();
        if let Some(region) = &config.aws_region {
            loader = loader.region(Region::new(region.clone()));
        }
        let shared_config = loader.load().await;
        Self::new(BedrockRuntimeClient::new(&shared_config))
    }
}

#[async_trait]
impl InferenceClient for BedrockClient {
    async fn invoke(
        &self,
        body: Vec<u8>,
        model_id: &str,
        accept: &str,
        content_type: &str,
    ) -> Result<Vec<u8>, SummarizeError> {
        debug!(model_id, bytes = body.len(), "Invoking Bedrock model");

        let output = self
            .client
            .invoke_model()
            .model_id(model_id)
            .accept(accept)
            .content_type(content_type)
            .body(Blob::new(body))
            .send()
            .await?;

        let raw = output.body.into_inner();
        info!(model_id, bytes = raw.len(), "Bedrock model responded");
        Ok(raw)
    }
}
