//! Response builders shared by the API routes.

use serde::Serialize;
use serde_json::{Value, json};

use crate::errors::SummarizeError;

/// Returns a 200 OK response with `body` encoded as JSON.
#[must_use]
pub fn ok_json<T: Serialize>(body: &T) -> Value {
    match serde_json::to_string(body) {
        Ok(encoded) => json!({
            "statusCode": 200,
            "headers": { "Content-Type": "application/json" },
            "body": encoded
        }),
        Err(e) => err_response(500, &format!("Failed to encode response: {e}")),
    }
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": json!({ "error": message }).to_string()
    })
}

#[must_use]
pub fn summarize_error_response(error: &SummarizeError) -> Value {
    err_response(error.status_code(), &error.to_string())
}
