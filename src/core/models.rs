use serde::{Deserialize, Serialize};

use crate::errors::SummarizeError;

/// Largest `max_tokens` value accepted for a single generation.
pub const MAX_TOKENS_LIMIT: u32 = 4096;

pub const DEFAULT_MAX_TOKENS: u32 = 512;
pub const DEFAULT_TEMPERATURE: f64 = 0.5;
pub const DEFAULT_TOP_P: f64 = 1.0;

/// Instruction used when the caller does not supply one.
pub const DEFAULT_INSTRUCTION: &str = "Please provide a summary of the following text. \
Do not add any information that is not mentioned in the text below.";

/// Everything a single summarization needs besides the model.
///
/// Values are validated on construction and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParameters {
    instruction: String,
    input_text: String,
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
}

impl GenerationParameters {
    /// # Errors
    ///
    /// Returns `InvalidParameters` if `max_tokens` exceeds 4096 or if
    /// `temperature`/`top_p` fall outside `0.0..=1.0`.
    pub fn new(
        instruction: impl Into<String>,
        input_text: impl Into<String>,
        max_tokens: u32,
        temperature: f64,
        top_p: f64,
    ) -> Result<Self, SummarizeError> {
        validate_sampling(max_tokens, temperature, top_p)?;
        Ok(Self {
            instruction: instruction.into(),
            input_text: input_text.into(),
            max_tokens,
            temperature,
            top_p,
        })
    }

    #[must_use]
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    #[must_use]
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    #[must_use]
    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    #[must_use]
    pub fn top_p(&self) -> f64 {
        self.top_p
    }
}

/// Checks the numeric generation settings against their allowed ranges.
///
/// # Errors
///
/// Returns `InvalidParameters` describing the first value out of range.
pub fn validate_sampling(
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
) -> Result<(), SummarizeError> {
    if max_tokens > MAX_TOKENS_LIMIT {
        return Err(SummarizeError::InvalidParameters(format!(
            "maxTokens must be between 0 and {MAX_TOKENS_LIMIT}, got {max_tokens}"
        )));
    }
    if !(0.0..=1.0).contains(&temperature) {
        return Err(SummarizeError::InvalidParameters(format!(
            "temperature must be between 0.0 and 1.0, got {temperature}"
        )));
    }
    if !(0.0..=1.0).contains(&top_p) {
        return Err(SummarizeError::InvalidParameters(format!(
            "topP must be between 0.0 and 1.0, got {top_p}"
        )));
    }
    Ok(())
}

/// Body of a `POST /summarize` request. Omitted fields fall back to config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    pub model_id: Option<String>,
    pub input_text: String,
    pub instruction: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResponse {
    pub model_id: String,
    pub summary: String,
}

/// Prompt and request body shown to users before they run a summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPreview {
    pub model_id: String,
    pub prompt: String,
    pub request_body: serde_json::Value,
}
