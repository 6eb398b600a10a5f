use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Unsupported model: {0}")]
    UnsupportedModel(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Inference call failed: {0}")]
    Transport(String),

    #[error("Invalid generation parameters: {0}")]
    InvalidParameters(String),

    #[error("Failed to serialize request body: {0}")]
    Serialization(String),
}

impl SummarizeError {
    /// HTTP status code used when this error is returned by the API handler.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            SummarizeError::UnsupportedModel(_)
            | SummarizeError::InvalidParameters(_) => 400,
            SummarizeError::MalformedResponse(_) | SummarizeError::Transport(_) => 502,
            SummarizeError::Serialization(_) => 500,
        }
    }
}

impl From<serde_json::Error> for SummarizeError {
    fn from(error: serde_json::Error) -> Self {
        SummarizeError::Serialization(error.to_string())
    }
}

// Generic implementation for AWS SDK errors
impl<E, R> From<aws_sdk_bedrockruntime::error::SdkError<E, R>> for SummarizeError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    fn from(error: aws_sdk_bedrockruntime::error::SdkError<E, R>) -> Self {
        SummarizeError::Transport(
            aws_sdk_bedrockruntime::error::DisplayErrorContext(&error).to_string(),
        )
    }
}
