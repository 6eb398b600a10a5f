//! Prompt and request body construction.
//!
//! The free functions resolve the model through [`DEFAULT_REGISTRY`]; callers
//! holding a [`ModelProfile`](super::profile::ModelProfile) should use its
//! methods instead so that the same profile drives the whole operation.

use super::profile::{DEFAULT_REGISTRY, TemplateFamily};
use super::schema::{
    ChatTurnRequest, InstructionFirstRequest, PLACEHOLDER_INPUT_TEXT, PLACEHOLDER_INSTRUCTION,
    PLACEHOLDER_MAX_TOKENS, PLACEHOLDER_TEMPERATURE, PLACEHOLDER_TOP_P,
};
use crate::core::models::RequestPreview;
use crate::errors::SummarizeError;

/// # Errors
///
/// Returns `UnsupportedModel` for an unknown `model_id`.
pub fn build_prompt(
    model_id: &str,
    instruction: &str,
    text: &str,
) -> Result<String, SummarizeError> {
    Ok(DEFAULT_REGISTRY.get(model_id)?.build_prompt(instruction, text))
}

/// # Errors
///
/// Returns `UnsupportedModel` for an unknown `model_id`, or `Serialization`
/// if the body cannot be encoded.
pub fn build_request_body(
    model_id: &str,
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
    prompt: &str,
) -> Result<String, SummarizeError> {
    DEFAULT_REGISTRY
        .get(model_id)?
        .build_request_body(max_tokens, temperature, top_p, prompt)
}

/// Request body with placeholder tokens in place of real values, for display.
///
/// # Errors
///
/// Returns `UnsupportedModel` for an unknown `model_id`.
pub fn display_request_body(model_id: &str) -> Result<String, SummarizeError> {
    DEFAULT_REGISTRY.get(model_id)?.display_request_body()
}

/// # Errors
///
/// Returns `UnsupportedModel` for an unknown `model_id`.
pub fn preview(model_id: &str) -> Result<RequestPreview, SummarizeError> {
    DEFAULT_REGISTRY.get(model_id)?.preview()
}

pub(crate) fn render_prompt(family: TemplateFamily, instruction: &str, text: &str) -> String {
    match family {
        TemplateFamily::InstructionFirst => format!("{instruction}\n<text>{text}</text>"),
        TemplateFamily::ChatTurn => {
            format!("Human: {instruction}\n<text>{text}</text>\nAssistant:")
        }
    }
}

pub(crate) fn render_display_prompt(family: TemplateFamily) -> String {
    render_prompt(family, PLACEHOLDER_INSTRUCTION, PLACEHOLDER_INPUT_TEXT)
}

pub(crate) fn render_body(
    family: TemplateFamily,
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
    prompt: &str,
) -> Result<String, SummarizeError> {
    let body = match family {
        TemplateFamily::InstructionFirst => serde_json::to_string(&InstructionFirstRequest::new(
            prompt,
            max_tokens,
            temperature,
            top_p,
        ))?,
        TemplateFamily::ChatTurn => serde_json::to_string(&ChatTurnRequest::new(
            prompt,
            max_tokens,
            temperature,
            top_p,
        ))?,
    };
    Ok(body)
}

pub(crate) fn render_display_body(family: TemplateFamily) -> Result<String, SummarizeError> {
    let body = match family {
        TemplateFamily::InstructionFirst => serde_json::to_string(&InstructionFirstRequest::new(
            PLACEHOLDER_INPUT_TEXT,
            PLACEHOLDER_MAX_TOKENS,
            PLACEHOLDER_TEMPERATURE,
            PLACEHOLDER_TOP_P,
        ))?,
        TemplateFamily::ChatTurn => serde_json::to_string(&ChatTurnRequest::new(
            PLACEHOLDER_INPUT_TEXT,
            PLACEHOLDER_MAX_TOKENS,
            PLACEHOLDER_TEMPERATURE,
            PLACEHOLDER_TOP_P,
        ))?,
    };
    Ok(body)
}
