mod common;

use std::future::{Ready, ready};

use bedrock_summarizer::ai::DEFAULT_REGISTRY;
use bedrock_summarizer::api::handler::route;
use bedrock_summarizer::core::config::AppConfig;
use common::MockClient;
use serde_json::{Value, json};

fn response_body(response: &Value) -> Value {
    serde_json::from_str(response["body"].as_str().unwrap()).unwrap()
}

fn http_event(method: &str, path: &str) -> Value {
    json!({
        "rawPath": path,
        "requestContext": { "http": { "method": method } }
    })
}

/// Connector for routes that must not build an inference client.
fn no_client() -> Ready<&'static MockClient> {
    panic!("route should not build an inference client")
}

#[tokio::test]
async fn test_models_route_lists_registry() {
    let config = AppConfig {
        aws_region: Some("us-east-1".to_string()),
        ..AppConfig::default()
    };

    let event = http_event("GET", "/models");
    let response = route(&config, &DEFAULT_REGISTRY, no_client, &event).await;

    assert_eq!(response["statusCode"], 200);
    let body = response_body(&response);
    assert_eq!(
        body["models"],
        json!(["amazon.titan-tg1-large", "anthropic.claude-v2"])
    );
    assert_eq!(body["defaultModelId"], "amazon.titan-tg1-large");
    assert_eq!(body["region"], "us-east-1");
}

#[tokio::test]
async fn test_models_route_reports_unset_region_as_null() {
    let config = AppConfig::default();

    let event = http_event("GET", "/models");
    let response = route(&config, &DEFAULT_REGISTRY, no_client, &event).await;

    assert_eq!(response_body(&response)["region"], Value::Null);
}

#[tokio::test]
async fn test_preview_route_uses_query_model() {
    let config = AppConfig::default();
    let mut event = http_event("GET", "/preview");
    event["rawQueryString"] = json!("modelId=anthropic.claude-v2");

    let response = route(&config, &DEFAULT_REGISTRY, no_client, &event).await;

    assert_eq!(response["statusCode"], 200);
    let body = response_body(&response);
    assert_eq!(body["modelId"], "anthropic.claude-v2");
    assert_eq!(
        body["prompt"],
        "Human: [instruction]\n<text>[input_text]</text>\nAssistant:"
    );
    assert_eq!(body["requestBody"]["max_tokens_to_sample"], "[max_tokens]");
}

#[tokio::test]
async fn test_preview_route_defaults_to_configured_model() {
    let config = AppConfig::default();

    let response =
        route(&config, &DEFAULT_REGISTRY, no_client, &http_event("GET", "/preview")).await;

    let body = response_body(&response);
    assert_eq!(body["modelId"], "amazon.titan-tg1-large");
    assert_eq!(body["prompt"], "[instruction]\n<text>[input_text]</text>");
}

#[tokio::test]
async fn test_preview_route_rejects_unknown_model() {
    let config = AppConfig::default();
    let mut event = http_event("GET", "/preview");
    event["queryStringParameters"] = json!({"modelId": "meta.llama2-13b-chat-v1"});

    let response = route(&config, &DEFAULT_REGISTRY, no_client, &event).await;

    assert_eq!(response["statusCode"], 400);
    assert!(
        response_body(&response)["error"]
            .as_str()
            .unwrap()
            .contains("meta.llama2-13b-chat-v1")
    );
}

#[tokio::test]
async fn test_preview_route_rejects_undecodable_model_id() {
    let config = AppConfig::default();
    let mut event = http_event("GET", "/preview");
    event["rawQueryString"] = json!("modelId=%FF");

    let response = route(&config, &DEFAULT_REGISTRY, no_client, &event).await;

    assert_eq!(response["statusCode"], 400);
    assert!(
        response_body(&response)["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid modelId query parameter")
    );
}

#[tokio::test]
async fn test_summarize_route_applies_defaults() {
    let config = AppConfig::default();
    let client = MockClient::responding(r#"{"results":[{"outputText":"short\n"}]}"#);
    let mut event = http_event("POST", "/prod/summarize");
    event["body"] = json!(json!({"inputText": "A long document."}).to_string());

    let response = route(&config, &DEFAULT_REGISTRY, || ready(&client), &event).await;

    assert_eq!(response["statusCode"], 200);
    let body = response_body(&response);
    assert_eq!(body["summary"], "short");
    assert_eq!(body["modelId"], "amazon.titan-tg1-large");

    let calls = client.calls();
    let sent: Value = serde_json::from_str(&calls[0].body).unwrap();
    assert_eq!(
        sent["inputText"],
        format!("{}\n<text>A long document.</text>", config.default_instruction)
    );
    assert_eq!(sent["textGenerationConfig"]["maxTokenCount"], 512);
    assert_eq!(sent["textGenerationConfig"]["temperature"], 0.5);
    assert_eq!(sent["textGenerationConfig"]["topP"], 1.0);
}

#[tokio::test]
async fn test_summarize_route_keeps_explicit_empty_instruction() {
    let config = AppConfig::default();
    let client = MockClient::responding(r#"{"results":[{"outputText":"ok"}]}"#);
    let mut event = http_event("POST", "/summarize");
    event["body"] = json!(json!({"inputText": "Hello", "instruction": ""}).to_string());

    let response = route(&config, &DEFAULT_REGISTRY, || ready(&client), &event).await;

    assert_eq!(response["statusCode"], 200);
    let sent: Value = serde_json::from_str(&client.calls()[0].body).unwrap();
    assert_eq!(sent["inputText"], "\n<text>Hello</text>");
}

#[tokio::test]
async fn test_summarize_route_honors_request_fields() {
    let config = AppConfig::default();
    let client = MockClient::responding(r#"{"completion":" Done."}"#);
    let mut event = http_event("POST", "/summarize");
    event["body"] = json!(
        json!({
            "modelId": "anthropic.claude-v2",
            "inputText": "Hello world",
            "instruction": "Summarize",
            "maxTokens": 100,
            "temperature": 0.3,
            "topP": 0.7
        })
        .to_string()
    );

    let response = route(&config, &DEFAULT_REGISTRY, || ready(&client), &event).await;

    assert_eq!(response["statusCode"], 200);
    assert_eq!(response_body(&response)["summary"], " Done.");

    let sent: Value = serde_json::from_str(&client.calls()[0].body).unwrap();
    assert_eq!(sent["max_tokens_to_sample"], 100);
    assert_eq!(sent["temperature"], 0.3);
    assert_eq!(sent["top_p"], 0.7);
}

#[tokio::test]
async fn test_summarize_route_maps_errors_to_status_codes() {
    let config = AppConfig::default();

    let client = MockClient::responding("{}");
    let mut event = http_event("POST", "/summarize");
    event["body"] = json!("not json");
    let response = route(&config, &DEFAULT_REGISTRY, || ready(&client), &event).await;
    assert_eq!(response["statusCode"], 400);

    event["body"] = json!(json!({"inputText": "x", "temperature": 2.0}).to_string());
    let response = route(&config, &DEFAULT_REGISTRY, || ready(&client), &event).await;
    assert_eq!(response["statusCode"], 400);
    assert!(client.calls().is_empty());

    event["body"] = json!(json!({"inputText": "x"}).to_string());
    let response = route(&config, &DEFAULT_REGISTRY, || ready(&client), &event).await;
    assert_eq!(response["statusCode"], 502);

    let failing = MockClient::failing("timeout");
    let response = route(&config, &DEFAULT_REGISTRY, || ready(&failing), &event).await;
    assert_eq!(response["statusCode"], 502);
    assert_eq!(
        response_body(&response)["error"],
        "Inference call failed: timeout"
    );
}

#[tokio::test]
async fn test_unknown_route_and_wrong_method() {
    let config = AppConfig::default();

    let response = route(&config, &DEFAULT_REGISTRY, no_client, &http_event("GET", "/nope")).await;
    assert_eq!(response["statusCode"], 404);

    let response =
        route(&config, &DEFAULT_REGISTRY, no_client, &http_event("GET", "/summarize")).await;
    assert_eq!(response["statusCode"], 405);

    let mut event = json!({"path": "/models", "httpMethod": "POST"});
    event["body"] = json!("{}");
    let response = route(&config, &DEFAULT_REGISTRY, no_client, &event).await;
    assert_eq!(response["statusCode"], 405);
}
