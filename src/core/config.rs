use std::env;
use std::str::FromStr;

use super::models::{
    DEFAULT_INSTRUCTION, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, DEFAULT_TOP_P, validate_sampling,
};

pub const DEFAULT_MODEL_ID: &str = "amazon.titan-tg1-large";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub aws_region: Option<String>,
    pub default_model_id: String,
    pub default_instruction: String,
    pub default_max_tokens: u32,
    pub default_temperature: f64,
    pub default_top_p: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            aws_region: None,
            default_model_id: DEFAULT_MODEL_ID.to_string(),
            default_instruction: DEFAULT_INSTRUCTION.to_string(),
            default_max_tokens: DEFAULT_MAX_TOKENS,
            default_temperature: DEFAULT_TEMPERATURE,
            default_top_p: DEFAULT_TOP_P,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let config = Self {
            aws_region: non_empty("AWS_REGION").or_else(|| non_empty("AWS_DEFAULT_REGION")),
            default_model_id: non_empty("BEDROCK_MODEL_ID")
                .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            default_instruction: non_empty("SUMMARY_INSTRUCTION")
                .unwrap_or_else(|| DEFAULT_INSTRUCTION.to_string()),
            default_max_tokens: parse_or(&non_empty, "SUMMARY_MAX_TOKENS", DEFAULT_MAX_TOKENS)?,
            default_temperature: parse_or(&non_empty, "SUMMARY_TEMPERATURE", DEFAULT_TEMPERATURE)?,
            default_top_p: parse_or(&non_empty, "SUMMARY_TOP_P", DEFAULT_TOP_P)?,
        };

        validate_sampling(
            config.default_max_tokens,
            config.default_temperature,
            config.default_top_p,
        )
        .map_err(|e| e.to_string())?;

        Ok(config)
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e| format!("{key}: {e}")),
        None => Ok(default),
    }
}
