//! API Lambda handler - thin router over the summarizer.
//!
//! Routes:
//! - `GET  …/models`    supported model ids and the configured default
//! - `GET  …/preview`   prompt and request body template for `?modelId=`
//! - `POST …/summarize` run a summary

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{error, info};
use uuid::Uuid;

use super::{helpers, parsing};
use crate::ai::client::{BedrockClient, InferenceClient};
use crate::ai::profile::{DEFAULT_REGISTRY, ModelRegistry};
use crate::core::config::AppConfig;
use crate::core::models::{SummarizeRequest, SummarizeResponse};
use crate::features::summarize::summarize;

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Returns an error only when configuration cannot be loaded; request
/// failures are reported as JSON error responses.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    Ok(route(
        &config,
        &DEFAULT_REGISTRY,
        || BedrockClient::from_config(&config),
        &event.payload,
    )
    .await)
}

/// Dispatches one event to the matching route.
///
/// `connect` is awaited only by routes that invoke a model.
pub async fn route<F, Fut, C>(
    config: &AppConfig,
    registry: &ModelRegistry,
    connect: F,
    payload: &Value,
) -> Value
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = C>,
    C: InferenceClient,
{
    let request_id = Uuid::new_v4();
    let path = parsing::request_path(payload).unwrap_or("/");
    let method = parsing::request_method(payload).unwrap_or_else(|| "GET".to_string());
    info!(%request_id, path, method = %method, "API request");

    let path = path.trim_end_matches('/');
    let response = if path.ends_with("/models") {
        require_method(&method, "GET").unwrap_or_else(|| handle_models(config, registry))
    } else if path.ends_with("/preview") {
        require_method(&method, "GET")
            .unwrap_or_else(|| handle_preview(config, registry, payload))
    } else if path.ends_with("/summarize") {
        match require_method(&method, "POST") {
            Some(rejection) => rejection,
            None => {
                let client = connect().await;
                handle_summarize(config, registry, &client, payload).await
            }
        }
    } else {
        helpers::err_response(404, "Not found")
    };

    info!(%request_id, status = %response["statusCode"], "API response");
    response
}

fn require_method(actual: &str, expected: &str) -> Option<Value> {
    (actual != expected).then(|| helpers::err_response(405, "Method not allowed"))
}

fn handle_models(config: &AppConfig, registry: &ModelRegistry) -> Value {
    let models: Vec<&str> = registry.ids().collect();
    helpers::ok_json(&json!({
        "models": models,
        "defaultModelId": config.default_model_id,
        "region": config.aws_region,
    }))
}

fn handle_preview(config: &AppConfig, registry: &ModelRegistry, payload: &Value) -> Value {
    let model_id = match parsing::query_param(payload, "modelId") {
        Ok(model_id) => model_id.unwrap_or_else(|| config.default_model_id.clone()),
        Err(message) => {
            error!("Rejected preview request: {}", message);
            return helpers::err_response(400, &message);
        }
    };

    match registry.get(&model_id).and_then(|profile| profile.preview()) {
        Ok(preview) => helpers::ok_json(&preview),
        Err(e) => helpers::summarize_error_response(&e),
    }
}

async fn handle_summarize<C>(
    config: &AppConfig,
    registry: &ModelRegistry,
    client: &C,
    payload: &Value,
) -> Value
where
    C: InferenceClient + ?Sized,
{
    let body = match parsing::request_body(payload) {
        Ok(body) => body,
        Err(message) => {
            error!("Rejected summarize request: {}", message);
            return helpers::err_response(400, &message);
        }
    };

    let request: SummarizeRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(e) => {
            error!("Invalid summarize request body: {}", e);
            return helpers::err_response(400, &format!("Invalid request body: {e}"));
        }
    };

    let model_id = request
        .model_id
        .as_deref()
        .unwrap_or(config.default_model_id.as_str());
    let instruction = request
        .instruction
        .as_deref()
        .unwrap_or(config.default_instruction.as_str());

    let result = summarize(
        client,
        registry,
        model_id,
        &request.input_text,
        instruction,
        request.max_tokens.unwrap_or(config.default_max_tokens),
        request.temperature.unwrap_or(config.default_temperature),
        request.top_p.unwrap_or(config.default_top_p),
    )
    .await;

    match result {
        Ok(summary) => helpers::ok_json(&SummarizeResponse {
            model_id: model_id.to_string(),
            summary,
        }),
        Err(e) => {
            error!("Failed to generate summary: {}", e);
            helpers::summarize_error_response(&e)
        }
    }
}
