//! Application State - Stato globale dell'applicazione
//!
//! Contiene tutti i repository in memoria, l'orologio iniettato e lo snapshot
//! delle stanze live aggiornato dal ticker.

use crate::core::clock::Clock;
use crate::core::config::Config;
use crate::entities::Room;
use crate::repositories::{FriendRepository, MessageRepository, RoomRepository};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Numero massimo di stanze mostrate nella sezione "Live Now"
pub const LIVE_NOW_LIMIT: usize = 3;

/// Stanze live calcolate all'ultimo refresh
#[derive(Debug, Clone)]
pub struct LiveSnapshot {
    pub rooms: Vec<Room>,
    pub refreshed_at: DateTime<Utc>,
}

/// Stato globale dell'applicazione condiviso tra tutte le route
pub struct AppState {
    /// Repository delle stanze generate all'avvio (immutabile)
    pub rooms: RoomRepository,

    /// Sessioni di chat effimere per stanza
    pub msg: MessageRepository,

    /// Amici, richieste e directory utenti
    pub friends: FriendRepository,

    /// Sorgente di "now" per la derivazione dello stato
    pub clock: Arc<dyn Clock>,

    /// Identità dell'utente che sta usando l'applicazione
    pub current_user: String,

    /// Snapshot delle stanze live, riscritto dal ticker
    pub live_rooms: RwLock<LiveSnapshot>,
}

impl AppState {
    /// Crea una nuova istanza di AppState a partire da repository già costruiti.
    /// Lo snapshot delle stanze live viene calcolato subito, come al primo render.
    pub fn new(
        rooms: RoomRepository,
        friends: FriendRepository,
        clock: Arc<dyn Clock>,
        current_user: impl Into<String>,
    ) -> Self {
        let now = clock.now();
        let snapshot = LiveSnapshot {
            rooms: rooms.find_live(&now, LIVE_NOW_LIMIT),
            refreshed_at: now,
        };

        Self {
            rooms,
            msg: MessageRepository::new(),
            friends,
            clock,
            current_user: current_user.into(),
            live_rooms: RwLock::new(snapshot),
        }
    }

    /// Genera i dati mock secondo la configurazione, ancorati all'istante corrente del clock
    pub fn from_config(config: &Config, clock: Arc<dyn Clock>) -> Self {
        let rooms = RoomRepository::seeded(
            config.mock_room_count,
            config.mock_seed,
            &config.current_user,
            &clock.now(),
        );
        Self::new(rooms, FriendRepository::seeded(), clock, config.current_user.clone())
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Ricalcola le stanze live e sostituisce lo snapshot, ritorna quante sono
    pub async fn refresh_live_rooms(&self) -> usize {
        let now = self.now();
        let live = self.rooms.find_live(&now, LIVE_NOW_LIMIT);
        let count = live.len();

        let mut snapshot = self.live_rooms.write().await;
        snapshot.rooms = live;
        snapshot.refreshed_at = now;

        debug!(live = count, "Live rooms snapshot refreshed");
        count
    }

    pub async fn live_snapshot(&self) -> LiveSnapshot {
        self.live_rooms.read().await.clone()
    }
}
