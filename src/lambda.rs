#[cfg(feature = "lambda")]
use access_gate::adapters::lambda::{handle_proxy, ProxyRequest, ProxyResponse};
#[cfg(feature = "lambda")]
use access_gate::utils::logger;
#[cfg(feature = "lambda")]
use access_gate::{AccessGate, LambdaConfig};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use std::sync::Arc;

#[cfg(feature = "lambda")]
async fn function_handler(
    gate: Arc<AccessGate>,
    event: LambdaEvent<ProxyRequest>,
) -> Result<ProxyResponse, Error> {
    let response = handle_proxy(&gate, &event.payload);
    tracing::info!(status = response.status_code, "Access check completed");
    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // Resolved once per cold start.
    let gate = Arc::new(AccessGate::from_config(&LambdaConfig::from_env()));

    run(service_fn(move |event| function_handler(Arc::clone(&gate), event))).await
}
