//! API Lambda handler - resolves the route, maps the request onto the record
//! service and turns the outcome into a proxy response.
//!
//! Storage faults are caught here, once per operation, logged and reported
//! as a 500 with an operation-specific message.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use super::routes::{Operation, RouteMatch, match_route};
use super::{helpers, parsing};
use crate::core::models::User;
use crate::errors::UserError;
use crate::service::{ServiceResponse, UserService};
use crate::storage::UserStore;

/// Lambda entrypoint for API Gateway proxy events.
///
/// # Errors
///
/// Never fails in practice; every outcome, including storage faults, is
/// rendered as a response payload.
#[tracing::instrument(
    level = "info",
    skip(service, event),
    fields(request_id = %event.context.request_id)
)]
pub async fn function_handler<S: UserStore>(
    service: &UserService<S>,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(handle_request(service, &event.payload).await)
}

/// Routes one proxy event payload and returns the proxy response.
pub async fn handle_request<S: UserStore>(service: &UserService<S>, payload: &Value) -> Value {
    let method = parsing::request_method(payload).unwrap_or("");
    let path = parsing::request_path(payload).unwrap_or("");
    info!(method = %method, path = %path, "API Lambda received request");

    let Some(RouteMatch { operation, user_id }) = match_route(method, path) else {
        warn!(method = %method, path = %path, "No route matched");
        return helpers::not_found();
    };

    // Only the write routes carry a body; anything sent to the others is ignored.
    let user = match operation {
        Operation::CreateUser | Operation::ReplaceUser | Operation::PatchUser => {
            let body = match parsing::request_body(payload) {
                Ok(body) => body,
                Err(e) => {
                    warn!("Rejected request body: {}", e);
                    return helpers::err_response(400, "Invalid JSON body");
                }
            };
            match User::from_body(&body, user_id.as_deref()) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(?operation, error = %e, "Rejected user payload");
                    return helpers::from_service(&ServiceResponse::from(e));
                }
            }
        }
        _ => None,
    };

    match dispatch(service, operation, user_id.as_deref(), user.as_ref()).await {
        Ok(response) => {
            info!(?operation, status = response.status, "Request completed");
            helpers::from_service(&response)
        }
        Err(e) => {
            error!(?operation, "Storage fault: {}", e);
            helpers::err_response(500, operation.failure_message())
        }
    }
}

async fn dispatch<S: UserStore>(
    service: &UserService<S>,
    operation: Operation,
    user_id: Option<&str>,
    user: Option<&User>,
) -> Result<ServiceResponse, UserError> {
    let missing = || UserError::ParseError(format!("{operation:?} is missing its input"));

    match operation {
        Operation::ListUsers => service.list().await,
        Operation::GetUser => service.get(user_id.ok_or_else(missing)?).await,
        Operation::CreateUser => service.create(user.ok_or_else(missing)?).await,
        Operation::ReplaceUser => service.replace(user.ok_or_else(missing)?).await,
        Operation::PatchUser => service.patch(user.ok_or_else(missing)?).await,
        Operation::DeleteUser => service.delete(user_id.ok_or_else(missing)?).await,
    }
}
