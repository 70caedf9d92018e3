//! Dashboard service - Pagina iniziale

use crate::core::AppState;
use crate::dtos::{DashboardDTO, QuickStatsDTO, RoomCardDTO};
use axum::extract::{Json, State};
use chrono::Duration;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Stanze mostrate per ciascuna sezione della dashboard
const SECTION_LIMIT: usize = 3;

#[instrument(skip(state), fields(user = %state.current_user))]
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardDTO> {
    debug!("Building dashboard");
    // 1. Leggere lo snapshot delle stanze live (aggiornato dal ticker)
    // 2. Calcolare le prossime stanze entro 24h e quelle di tendenza
    // 3. Calcolare le statistiche rapide dell'utente corrente
    let now = state.now();
    let live = state.live_snapshot().await;

    let upcoming = state.rooms.find_upcoming(&now, Duration::hours(24), SECTION_LIMIT);
    let trending = state.rooms.find_trending(SECTION_LIMIT);

    let stats = QuickStatsDTO {
        rooms_created: state.rooms.find_many_by_owner(&state.current_user).len(),
        rooms_joined: state.rooms.find_many_by_participant(&state.current_user).len(),
        active_friends: state.friends.count_active(),
    };

    Json(DashboardDTO {
        greeting: format!("Welcome back, {}!", state.current_user),
        live_now: RoomCardDTO::from_rooms(&live.rooms, &now),
        live_refreshed_at: live.refreshed_at,
        upcoming: RoomCardDTO::from_rooms(&upcoming, &now),
        trending: RoomCardDTO::from_rooms(&trending, &now),
        stats,
    })
}
