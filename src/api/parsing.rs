//! Field access for API Gateway / Lambda function URL events.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Request path from a v2 (`rawPath`) or v1 (`path`) event.
pub fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"]).or_else(|| v_str(payload, &["path"]))
}

/// Upper-cased HTTP method from a v2 or v1 event.
pub fn request_method(payload: &Value) -> Option<String> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
        .map(str::to_ascii_uppercase)
}

/// Looks up a query parameter, preferring the raw query string.
///
/// # Errors
///
/// Returns a message if the raw value is not valid percent-encoded UTF-8.
pub fn query_param(payload: &Value, name: &str) -> Result<Option<String>, String> {
    let raw_value = v_str(payload, &["rawQueryString"]).and_then(|q| {
        q.split('&').find_map(|kv| {
            let (key, value) = kv.split_once('=').unwrap_or((kv, ""));
            (key == name).then_some(value)
        })
    });

    let value = match raw_value {
        Some(value) => {
            let plus_decoded = value.replace('+', " ");
            let decoded = urlencoding::decode(&plus_decoded)
                .map_err(|e| format!("Invalid {name} query parameter: {e}"))?;
            Some(decoded.into_owned())
        }
        None => v_str(payload, &["queryStringParameters", name])
            .map(std::string::ToString::to_string),
    };

    Ok(value.filter(|v| !v.is_empty()))
}

/// Request body as text, decoding base64 bodies.
///
/// # Errors
///
/// Returns a message describing why the body is unusable.
pub fn request_body(payload: &Value) -> Result<String, String> {
    let Some(body) = payload.get("body") else {
        return Err("Missing body".to_string());
    };

    let Some(body_str) = body.as_str() else {
        return Err("Invalid body format".to_string());
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if is_base64 {
        let bytes = STANDARD
            .decode(body_str)
            .map_err(|e| format!("Invalid base64 body: {e}"))?;
        String::from_utf8(bytes).map_err(|e| format!("Body is not valid UTF-8: {e}"))
    } else {
        Ok(body_str.to_string())
    }
}
