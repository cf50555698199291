use chrono::Utc;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use order_sync_core::config::{Region, SyncConfig};
use order_sync_lambda::adapters::normalize::{HttpNormalizeSink, DEFAULT_NORMALIZE_ENDPOINT};
use order_sync_lambda::adapters::sp_orders::SpOrdersClient;
use order_sync_lambda::adapters::throttle::SleepThrottle;
use order_sync_lambda::handlers::sync::{handle_sync_event, SyncDependencies};
use order_sync_lambda::observer::TracingObserver;

fn config_from_env() -> SyncConfig {
    let mut config = SyncConfig::default();
    if let Ok(region) = std::env::var("SP_API_REGION") {
        config.region = Region::parse(&region);
    }
    if let Ok(marketplace_id) = std::env::var("SP_MARKETPLACE_ID") {
        config.marketplace_id = marketplace_id;
    }
    config
}

fn normalize_endpoint_from_env() -> String {
    std::env::var("NORMALIZE_ENDPOINT").unwrap_or_else(|_| DEFAULT_NORMALIZE_ENDPOINT.to_string())
}

async fn handle_request(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = config_from_env();
    let orders = SpOrdersClient::new(&config);
    let sink = HttpNormalizeSink::new(normalize_endpoint_from_env());
    let throttle = SleepThrottle;
    let observer = TracingObserver;

    let deps = SyncDependencies {
        orders: &orders,
        sink: &sink,
        throttle: &throttle,
        observer: &observer,
        config: &config,
    };

    let response = handle_sync_event(&event.payload, Utc::now(), &deps);
    serde_json::to_value(response)
        .map_err(|error| Error::from(format!("failed to serialize handler response: {error}")))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    lambda_runtime::run(service_fn(handle_request)).await
}
