use std::sync::Arc;

use ai_studio_relay::{config::RelayConfig, routes, state::AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = RelayConfig::from_env()?;
    let addr = config.socket_addr();
    let state = Arc::new(AppState::new(config.clone())?);

    let app = routes::create_router(&config.static_dir).with_state(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("🚀 Relay running at http://{}", addr);
    info!(
        ai_service = %config.ai_service_url,
        timeout = ?config.ai_service_timeout,
        "forwarding chat to inference service"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
