use tracing::info;

use crate::ai::client::{InferenceClient, JSON_CONTENT_TYPE};
use crate::ai::profile::{ModelProfile, ModelRegistry};
use crate::core::models::GenerationParameters;
use crate::errors::SummarizeError;

/// Summarize `input_text` with the model registered under `model_id`.
///
/// The profile is resolved once and drives both the request and the
/// extraction. Client failures are returned unchanged.
///
/// # Errors
///
/// Returns `UnsupportedModel` or `InvalidParameters` before any call is made,
/// the client's error if the invocation or decoding fails, and
/// `MalformedResponse` if the response lacks the model's text field.
#[allow(clippy::too_many_arguments)]
pub async fn summarize<C>(
    client: &C,
    registry: &ModelRegistry,
    model_id: &str,
    input_text: &str,
    instruction: &str,
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
) -> Result<String, SummarizeError>
where
    C: InferenceClient + ?Sized,
{
    let profile = registry.get(model_id)?;
    let params =
        GenerationParameters::new(instruction, input_text, max_tokens, temperature, top_p)?;
    summarize_with_profile(client, profile, &params).await
}

#[tracing::instrument(
    level = "info",
    skip(client, profile, params),
    fields(model_id = %profile.id())
)]
pub async fn summarize_with_profile<C>(
    client: &C,
    profile: &ModelProfile,
    params: &GenerationParameters,
) -> Result<String, SummarizeError>
where
    C: InferenceClient + ?Sized,
{
    let (prompt, body) = profile.build_request(params)?;

    #[cfg(feature = "debug-logs")]
    info!("Using prompt:\n{}", prompt);

    info!(
        prompt_chars = prompt.chars().count(),
        max_tokens = params.max_tokens(),
        "Requesting summary"
    );

    let raw = client
        .invoke(
            body.into_bytes(),
            profile.id(),
            JSON_CONTENT_TYPE,
            JSON_CONTENT_TYPE,
        )
        .await?;
    let response = client.decode(&raw)?;
    let text = profile.extract_text(&response)?;

    let summary = text.trim_matches('\n').to_string();
    info!(summary_chars = summary.chars().count(), "Summary generated");
    Ok(summary)
}
