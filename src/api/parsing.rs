use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};

use crate::errors::UserError;

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

/// HTTP method of an API Gateway proxy event (payload v2 or v1).
pub fn request_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "method"]).or_else(|| v_str(payload, &["httpMethod"]))
}

/// Request path of an API Gateway proxy event (payload v2 or v1).
///
/// HTTP API `rawPath` includes the stage name for any stage other than
/// `$default`; that prefix is removed so routes match on every stage.
pub fn request_path(payload: &Value) -> Option<&str> {
    let Some(raw_path) = v_str(payload, &["rawPath"]) else {
        return v_str(payload, &["path"]);
    };

    let stage = v_str(payload, &["requestContext", "stage"]).filter(|s| *s != "$default");
    let unstaged = stage.and_then(|stage| {
        raw_path
            .strip_prefix('/')
            .and_then(|p| p.strip_prefix(stage))
            .filter(|rest| rest.is_empty() || rest.starts_with('/'))
    });

    Some(match unstaged {
        Some("") => "/",
        Some(rest) => rest,
        None => raw_path,
    })
}

/// Decodes the request body as JSON.
///
/// A missing or blank body and any non-object JSON value both yield `{}`, so
/// callers see absent fields rather than an error.
///
/// # Errors
///
/// Returns a `ParseError` if the body is not valid base64 (when flagged as
/// encoded), not UTF-8, or not JSON.
pub fn request_body(payload: &Value) -> Result<Value, UserError> {
    let Some(raw) = v_str(payload, &["body"]) else {
        return Ok(json!({}));
    };

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let text = if encoded {
        let bytes = STANDARD
            .decode(raw)
            .map_err(|e| UserError::ParseError(format!("Invalid base64 body: {e}")))?;
        String::from_utf8(bytes)
            .map_err(|e| UserError::ParseError(format!("Body is not UTF-8: {e}")))?
    } else {
        raw.to_string()
    };

    if text.trim().is_empty() {
        return Ok(json!({}));
    }

    let body: Value = serde_json::from_str(&text)?;
    Ok(if body.is_object() { body } else { json!({}) })
}
