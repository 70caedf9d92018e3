use dotenv::dotenv;
use std::env;
use tracing::{info, warn};

pub const DEFAULT_CURRENT_USER: &str = "currentUser";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub app_env: String,
    pub mock_room_count: usize,
    pub mock_seed: u64,
    pub live_refresh_secs: u64,
    pub current_user: String,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let mock_room_count = env::var("MOCK_ROOM_COUNT")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<usize>()
            .map_err(|_| "Invalid MOCK_ROOM_COUNT: must be a positive number".to_string())?;

        // senza seed esplicito ne estraiamo uno e lo logghiamo, così la sessione è riproducibile
        let mock_seed = match env::var("MOCK_SEED") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|_| "Invalid MOCK_SEED: must be an unsigned 64-bit number".to_string())?,
            Err(_) => {
                let seed = rand::random::<u64>();
                warn!("MOCK_SEED not set, using random seed {}", seed);
                seed
            }
        };

        let live_refresh_secs = env::var("LIVE_REFRESH_SECS")
            .unwrap_or_else(|_| "60".to_string())
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| "Invalid LIVE_REFRESH_SECS: must be a number greater than 0".to_string())?;

        let current_user =
            env::var("CURRENT_USER").unwrap_or_else(|_| DEFAULT_CURRENT_USER.to_string());

        Ok(Config {
            server_host,
            server_port,
            app_env,
            mock_room_count,
            mock_seed,
            live_refresh_secs,
            current_user,
        })
    }

    /// Logga la configurazione all'avvio
    pub fn print_info(&self) {
        info!("Server Configuration:");
        info!("   Environment: {}", self.app_env);
        info!("   Server Address: {}:{}", self.server_host, self.server_port);
        info!("   Mock Rooms: {} (seed {})", self.mock_room_count, self.mock_seed);
        info!("   Live Refresh: {}s", self.live_refresh_secs);
        info!("   Current User: {}", self.current_user);
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
