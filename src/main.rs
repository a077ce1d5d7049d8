use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use comick_relay::{api::routes::create_router, config::Config, AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load()?;
    let server_addr = config.server_addr;
    info!(strategy = ?config.fetch_strategy, "starting relay on {}", server_addr);

    let app_state = AppState {
        config: Arc::new(config),
    };

    let app = create_router(app_state);

    let listener = TcpListener::bind(server_addr).await?;
    info!("listening on {}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
