//! Model profiles and the registry that maps model identifiers to them.

use once_cell::sync::Lazy;
use serde_json::Value;

use super::{extract, payload};
use crate::core::models::{GenerationParameters, RequestPreview};
use crate::errors::SummarizeError;

pub const TITAN_TG1_LARGE: &str = "amazon.titan-tg1-large";
pub const CLAUDE_V2: &str = "anthropic.claude-v2";

/// Registry holding the built-in profiles.
pub static DEFAULT_REGISTRY: Lazy<ModelRegistry> = Lazy::new(ModelRegistry::default);

/// Prompt/request/response conventions shared by a group of models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFamily {
    /// Instruction followed by the wrapped text; Titan-style request and response.
    InstructionFirst,
    /// `Human:`/`Assistant:` turns; Claude text-completion request and response.
    ChatTurn,
}

/// Everything needed to talk to one model: its id and its template family.
///
/// A single profile is resolved per operation and used for both building the
/// request and extracting the response, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelProfile {
    id: String,
    family: TemplateFamily,
}

impl ModelProfile {
    pub fn new(id: impl Into<String>, family: TemplateFamily) -> Self {
        Self {
            id: id.into(),
            family,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn family(&self) -> TemplateFamily {
        self.family
    }

    #[must_use]
    pub fn build_prompt(&self, instruction: &str, text: &str) -> String {
        payload::render_prompt(self.family, instruction, text)
    }

    /// # Errors
    ///
    /// Returns `Serialization` if the body cannot be encoded as JSON.
    pub fn build_request_body(
        &self,
        max_tokens: u32,
        temperature: f64,
        top_p: f64,
        prompt: &str,
    ) -> Result<String, SummarizeError> {
        payload::render_body(self.family, max_tokens, temperature, top_p, prompt)
    }

    /// Builds prompt and body for a full set of generation parameters.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the body cannot be encoded as JSON.
    pub fn build_request(
        &self,
        params: &GenerationParameters,
    ) -> Result<(String, String), SummarizeError> {
        let prompt = self.build_prompt(params.instruction(), params.input_text());
        let body = self.build_request_body(
            params.max_tokens(),
            params.temperature(),
            params.top_p(),
            &prompt,
        )?;
        Ok((prompt, body))
    }

    /// # Errors
    ///
    /// Returns `Serialization` if the body cannot be encoded as JSON.
    pub fn display_request_body(&self) -> Result<String, SummarizeError> {
        payload::render_display_body(self.family)
    }

    /// # Errors
    ///
    /// Returns `Serialization` if the preview body cannot be encoded as JSON.
    pub fn preview(&self) -> Result<RequestPreview, SummarizeError> {
        let body = self.display_request_body()?;
        Ok(RequestPreview {
            model_id: self.id.clone(),
            prompt: payload::render_display_prompt(self.family),
            request_body: serde_json::from_str(&body)?,
        })
    }

    /// # Errors
    ///
    /// Returns `MalformedResponse` if the response lacks this model's text field.
    pub fn extract_text(&self, response: &Value) -> Result<String, SummarizeError> {
        extract::extract_for_family(self.family, response)
    }
}

/// Lookup table of supported models, in registration order.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    profiles: Vec<ModelProfile>,
}

impl Default for ModelRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(ModelProfile::new(
            TITAN_TG1_LARGE,
            TemplateFamily::InstructionFirst,
        ));
        registry.register(ModelProfile::new(CLAUDE_V2, TemplateFamily::ChatTurn));
        registry
    }
}

impl ModelRegistry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            profiles: Vec::new(),
        }
    }

    /// Adds a profile, replacing any existing profile with the same id.
    pub fn register(&mut self, profile: ModelProfile) {
        if let Some(existing) = self.profiles.iter_mut().find(|p| p.id == profile.id) {
            *existing = profile;
        } else {
            self.profiles.push(profile);
        }
    }

    /// # Errors
    ///
    /// Returns `UnsupportedModel` if no profile is registered under `model_id`.
    pub fn get(&self, model_id: &str) -> Result<&ModelProfile, SummarizeError> {
        self.profiles
            .iter()
            .find(|p| p.id == model_id)
            .ok_or_else(|| SummarizeError::UnsupportedModel(model_id.to_string()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.id.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
