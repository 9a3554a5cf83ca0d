use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use devil_api::app::{app, AppState};
use devil_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DEVIL_API_KEY, DEVIL_SOCKET_PATH, etc.
    let _ = dotenvy::dotenv();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        socket = %config.backend.socket_path.display(),
        timeout_secs = config.backend.timeout_secs,
        fail_threshold = config.auth.fail_threshold,
        block_seconds = config.auth.block_seconds,
        "Starting devil-api"
    );

    let state = AppState::from_config(&config);

    let bind_addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", bind_addr, e))?;

    tracing::info!("devil-api listening on http://{}", bind_addr);

    axum::serve(
        listener,
        app(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
