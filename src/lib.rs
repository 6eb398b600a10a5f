//! Bedrock Summarizer - summarize text with foundation models hosted on Amazon Bedrock.
//!
//! The crate turns one intent ("summarize this text with these parameters")
//! into the model-specific prompt and `InvokeModel` body, calls Bedrock, and
//! extracts the generated text from the model-specific response.
//!
//! # Architecture
//!
//! - `ai::profile` maps each model id to a `ModelProfile` (prompt template,
//!   request schema, response schema)
//! - `ai::client` defines the `InferenceClient` seam and its Bedrock runtime
//!   implementation built on `aws-sdk-bedrockruntime`
//! - `features::summarize` sequences build → invoke → decode → extract → trim
//! - `api` exposes models, previews and summaries as a Lambda HTTP handler
//!
//! # Example
//!
//! ```no_run
//! use bedrock_summarizer::ai::{BedrockClient, DEFAULT_REGISTRY};
//! use bedrock_summarizer::core::config::AppConfig;
//! use bedrock_summarizer::features::summarize;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     bedrock_summarizer::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let client = BedrockClient::from_config(&config).await;
//!
//!     let summary = summarize(
//!         &client,
//!         &DEFAULT_REGISTRY,
//!         "anthropic.claude-v2",
//!         "Rust is a general-purpose programming language...",
//!         &config.default_instruction,
//!         512,
//!         0.5,
//!         1.0,
//!     )
//!     .await?;
//!
//!     println!("Summary: {summary}");
//!     Ok(())
//! }
//! ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod features;

pub use errors::SummarizeError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Log levels follow `RUST_LOG`, defaulting to `info`. Output is suitable for
/// `CloudWatch` Logs. Call once at process start.
///
/// # Example
///
/// ```
/// bedrock_summarizer::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
