use homescope::api::{ApiHandler, ApiResponse, Query};
use homescope::utils::{logger, validation::Validate};
use homescope::{GoogleMapsClient, LambdaConfig};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub path: String,
    #[serde(default)]
    pub query_string_parameters: Option<Query>,
}

async fn function_handler(
    handler: Arc<ApiHandler<GoogleMapsClient, GoogleMapsClient>>,
    event: LambdaEvent<Request>,
) -> Result<ApiResponse, Error> {
    let query = event.payload.query_string_parameters.unwrap_or_default();
    tracing::info!("Handling {} ({} parameters)", event.payload.path, query.len());

    let response = handler.handle(&event.payload.path, &query).await;

    tracing::info!("{} -> {}", event.payload.path, response.status_code);
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 冷啟動時讀取一次配置，之後由 client 持有 API 金鑰
    let config = LambdaConfig::from_env()?;
    config.validate()?;

    let client = GoogleMapsClient::from_config(&config);
    let handler = Arc::new(ApiHandler::new(client.clone(), client));

    run(service_fn(move |event: LambdaEvent<Request>| {
        let handler = handler.clone();
        async move { function_handler(handler, event).await }
    }))
    .await
}
