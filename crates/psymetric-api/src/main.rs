use tracing_subscriber::EnvFilter;

use psymetric_api::config::ServiceConfig;
use psymetric_api::{build_state, router};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServiceConfig::from_env()?;
    let state = build_state(&config)?;
    tracing::info!(
        catalog = ?config.catalog,
        builtin_instruments = config.builtin_instruments,
        "scoring service starting"
    );

    lambda_http::run(router(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}
