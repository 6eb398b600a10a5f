//! Wire shapes of the Bedrock `InvokeModel` request bodies.
//!
//! The numeric fields are generic so that the same shapes serve both real
//! requests and the placeholder previews shown to users.

use serde::Serialize;

/// Value of `top_k` sent with every chat-turn request.
pub const CHAT_TURN_TOP_K: u32 = 250;

pub const PLACEHOLDER_INSTRUCTION: &str = "[instruction]";
pub const PLACEHOLDER_INPUT_TEXT: &str = "[input_text]";
pub const PLACEHOLDER_MAX_TOKENS: &str = "[max_tokens]";
pub const PLACEHOLDER_TEMPERATURE: &str = "[temperature]";
pub const PLACEHOLDER_TOP_P: &str = "[top_p]";

/// Instruction-first body (Amazon Titan text models).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionFirstRequest<'a, T, F> {
    pub input_text: &'a str,
    pub text_generation_config: TextGenerationConfig<T, F>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextGenerationConfig<T, F> {
    pub max_token_count: T,
    pub stop_sequences: Vec<String>,
    pub temperature: F,
    pub top_p: F,
}

/// Chat-turn body (Anthropic Claude text-completion models).
#[derive(Debug, Serialize)]
pub struct ChatTurnRequest<'a, T, F> {
    pub prompt: &'a str,
    pub max_tokens_to_sample: T,
    pub temperature: F,
    pub top_k: u32,
    pub top_p: F,
    pub stop_sequences: Vec<String>,
}

impl<'a, T, F> InstructionFirstRequest<'a, T, F> {
    pub fn new(prompt: &'a str, max_tokens: T, temperature: F, top_p: F) -> Self {
        Self {
            input_text: prompt,
            text_generation_config: TextGenerationConfig {
                max_token_count: max_tokens,
                stop_sequences: Vec::new(),
                temperature,
                top_p,
            },
        }
    }
}

impl<'a, T, F> ChatTurnRequest<'a, T, F> {
    pub fn new(prompt: &'a str, max_tokens: T, temperature: F, top_p: F) -> Self {
        Self {
            prompt,
            max_tokens_to_sample: max_tokens,
            temperature,
            top_k: CHAT_TURN_TOP_K,
            top_p,
            stop_sequences: Vec::new(),
        }
    }
}
