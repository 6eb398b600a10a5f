//! Generated-text extraction from decoded model responses.

use serde_json::Value;

use super::profile::{DEFAULT_REGISTRY, TemplateFamily};
use crate::errors::SummarizeError;

/// Returns the generated text embedded in `response`, unmodified.
///
/// # Errors
///
/// Returns `UnsupportedModel` for an unknown `model_id`, or
/// `MalformedResponse` if the model's text field is missing.
pub fn extract_text(model_id: &str, response: &Value) -> Result<String, SummarizeError> {
    DEFAULT_REGISTRY.get(model_id)?.extract_text(response)
}

pub(crate) fn extract_for_family(
    family: TemplateFamily,
    response: &Value,
) -> Result<String, SummarizeError> {
    let text = match family {
        TemplateFamily::InstructionFirst => response
            .get("results")
            .and_then(|r| r.as_array())
            .and_then(|r| r.first())
            .and_then(|r| r.get("outputText"))
            .and_then(|t| t.as_str())
            .ok_or_else(|| {
                SummarizeError::MalformedResponse("missing results[0].outputText".to_string())
            })?,
        TemplateFamily::ChatTurn => response
            .get("completion")
            .and_then(|c| c.as_str())
            .ok_or_else(|| SummarizeError::MalformedResponse("missing completion".to_string()))?,
    };
    Ok(text.to_string())
}
