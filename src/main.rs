mod api_doc;
mod app;
mod config;
mod handlers;
mod models;
mod routes;

use std::net::SocketAddr;

use anyhow::Context;
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coffeeshop_llm=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("coffeeshop-llm starting");

    let config = Config::from_env()?;
    config.log_startup();

    let addr: SocketAddr = format!("{}:{}", config.service_host, config.service_port)
        .parse()
        .context("SERVICE_HOST and SERVICE_PORT must form a valid socket address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    axum::serve(listener, app::create_app()).await?;

    Ok(())
}
