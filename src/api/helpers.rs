//! Response builders for API Gateway proxy responses.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::error;

use crate::service::ServiceResponse;

/// Wraps a JSON body in a proxy response with the given status code.
#[must_use]
pub fn json_response(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body.to_string()
    })
}

/// Returns an error response shaped as `{"error": <payload>}`.
#[must_use]
pub fn err_response<T: Serialize + ?Sized>(status_code: u16, payload: &T) -> Value {
    match serde_json::to_value(payload) {
        Ok(value) => json_response(status_code, &json!({ "error": value })),
        Err(e) => {
            error!("Failed to serialize error payload: {}", e);
            json_response(500, &json!({ "error": "Internal Server Error" }))
        }
    }
}

#[must_use]
pub fn not_found() -> Value {
    err_response(404, "Not Found")
}

/// Successful outcomes are sent as-is; anything else goes inside `error`.
#[must_use]
pub fn from_service(response: &ServiceResponse) -> Value {
    if response.is_success() {
        match serde_json::to_value(&response.body) {
            Ok(value) => json_response(response.status, &value),
            Err(e) => {
                error!("Failed to serialize response body: {}", e);
                json_response(500, &json!({ "error": "Internal Server Error" }))
            }
        }
    } else {
        err_response(response.status, &response.body)
    }
}
