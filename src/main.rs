use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use attom_mcp_server::config::load_config;
use attom_mcp_server::core::error::AppError;
use attom_mcp_server::server::{AppState, build_router};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = load_config()?;
    init_tracing(&config.log_level);

    let addr = format!("{}:{}", config.host, config.port);
    let demo_mode = config.demo_mode;
    let app = build_router(AppState::from_config(config)?);

    tracing::info!(%addr, demo_mode, "starting server");
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|err| AppError::internal(format!("failed to bind {addr}: {err}")))?;
    axum::serve(listener, app)
        .await
        .map_err(|err| AppError::internal(format!("server error: {err}")))?;

    Ok(())
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
