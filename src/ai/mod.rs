//! Model profiles, payload building, response extraction and the inference client

pub mod client;
pub mod extract;
pub mod payload;
pub mod profile;
pub mod schema;

// Re-export main types for convenience
pub use client::{BedrockClient, InferenceClient};
pub use extract::extract_text;
pub use payload::{build_prompt, build_request_body, display_request_body};
pub use profile::{DEFAULT_REGISTRY, ModelProfile, ModelRegistry, TemplateFamily};
