use roomloop::core::{AppState, Config, LiveRoomsTicker, SystemClock};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Inizializza il logging, RUST_LOG sovrascrive il livello di default
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Inizializza la configurazione
    let config = Config::from_env()?;
    config.print_info();

    // Genera i dati mock e crea lo stato condiviso
    let state = Arc::new(AppState::from_config(&config, Arc::new(SystemClock)));

    // Ticker che ricalcola le stanze live per la dashboard
    let ticker = LiveRoomsTicker::spawn(
        state.clone(),
        Duration::from_secs(config.live_refresh_secs),
    );

    let app = roomloop::create_router(state);

    // Crea il listener TCP
    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Server listening on http://{}", config.bind_address());

    // Avvia il server, Ctrl-C per lo shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    ticker.cancel().await;
    info!("Server stopped");

    Ok(())
}
