mod api_doc;
mod codec;
mod config;
mod dispatcher;
mod error;
mod handlers;
mod lambda;
mod models;
mod response;
mod routes;
mod state;
mod store;
#[cfg(test)]
mod test_support;

use std::sync::Arc;

use anyhow::Context;
use config::Config;
use state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("dynamo-items starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = store::from_config(&config).await?;
    let state = AppState {
        store,
        config: Arc::new(config),
    };

    if state.config.lambda_runtime {
        lambda::run(state).await
    } else {
        serve(state).await
    }
}

async fn serve(state: AppState) -> anyhow::Result<()> {
    let addr = format!("{}:{}", state.config.service_host, state.config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on http://{}", addr);
    tracing::info!("API docs at http://{}{}", addr, routes::SWAGGER_UI);

    axum::serve(listener, routes::app(state))
        .await
        .context("HTTP server failed")
}
