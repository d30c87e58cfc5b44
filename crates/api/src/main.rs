use anyhow::Context;

use pulse_infra::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pulse_observability::init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    for key in config.missing_credentials() {
        tracing::warn!("{key} not set; dependent endpoint will answer 503");
    }

    let app = pulse_api::app::build_app(&config).context("failed to build upstream clients")?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
