use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::{error, info};
use users_api::api::function_handler;
use users_api::core::config::AppConfig;
use users_api::service::UserService;
use users_api::storage::DynamoUserStore;

#[tokio::main]
async fn main() -> Result<(), Error> {
    users_api::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    let store = DynamoUserStore::from_config(&config).await;
    info!(table = %store.table_name(), "Users API starting");
    let service = Arc::new(UserService::new(store));

    run(service_fn(move |event: LambdaEvent<Value>| {
        let service = Arc::clone(&service);
        async move { function_handler(&*service, event).await }
    }))
    .await
}
