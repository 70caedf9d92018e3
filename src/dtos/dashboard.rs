//! Dashboard DTOs

use super::room::RoomCardDTO;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuickStatsDTO {
    pub rooms_created: usize,
    pub rooms_joined: usize,
    pub active_friends: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DashboardDTO {
    pub greeting: String,
    pub live_now: Vec<RoomCardDTO>,
    // istante dell'ultimo refresh del ticker
    pub live_refreshed_at: DateTime<Utc>,
    pub upcoming: Vec<RoomCardDTO>,
    pub trending: Vec<RoomCardDTO>,
    pub stats: QuickStatsDTO,
}
