use anyhow::Context;

use coordinate_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    coordinate_observability::init();

    let config = ApiConfig::from_env()?;
    let app = coordinate_api::app::build_app(config.seed)?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(addr = %listener.local_addr()?, seed = %config.seed, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
