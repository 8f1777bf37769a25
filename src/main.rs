use tokio::net::TcpListener;
use tracing::info;

use room_availability::api::{AppState, create_router};
use room_availability::config::ConfigLoader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config_dir = std::env::var("ROOM_AVAILABILITY_CONFIG")
        .unwrap_or_else(|_| "./config/default".into());
    let bind = std::env::var("ROOM_AVAILABILITY_BIND").unwrap_or_else(|_| "127.0.0.1:3000".into());

    let config = ConfigLoader::load(&config_dir)?;
    info!("room-availability listening on {bind}");
    info!("  config_dir: {config_dir}");
    info!("  periods: {}", config.periods().len());
    info!("  rooms: {}", config.config().rooms_path().display());
    info!("  schedules: {}", config.config().schedules_path().display());

    let router = create_router(AppState::new(config));
    let listener = TcpListener::bind(&bind).await?;

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    info!("room-availability stopped");
    Ok(())
}
