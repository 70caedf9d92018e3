#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};
use roomloop::core::{AppState, FixedClock};
use roomloop::repositories::{FriendRepository, RoomRepository};
use std::sync::Arc;

pub const CURRENT_USER: &str = "currentUser";
pub const TEST_SEED: u64 = 20240510;

/// Istante fisso a cui sono ancorati i dati mock dei test
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
}

/// Crea un AppState per i test
///
/// # Returns
/// Lo stato con 10 stanze generate dal seed di test e l'orologio fermo su `test_now()`,
/// insieme all'orologio stesso per poterlo spostare
pub fn create_test_state() -> (Arc<AppState>, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(test_now()));
    let rooms = RoomRepository::seeded(10, TEST_SEED, CURRENT_USER, &test_now());
    let state = Arc::new(AppState::new(
        rooms,
        FriendRepository::seeded(),
        clock.clone(),
        CURRENT_USER,
    ));
    (state, clock)
}

/// Crea un TestServer per i test
///
/// # Arguments
/// * `state` - AppState da utilizzare per il server
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = roomloop::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}
