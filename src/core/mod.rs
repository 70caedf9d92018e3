//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Orologio iniettabile
//! - Configurazione
//! - Gestione errori
//! - Stato applicazione
//! - Ticker delle stanze live

pub mod clock;
pub mod config;
pub mod error;
pub mod state;
pub mod ticker;

// Re-exports per facilitare l'import
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::AppError;
pub use state::{AppState, LiveSnapshot};
pub use ticker::LiveRoomsTicker;
