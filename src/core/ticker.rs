//! Ticker delle stanze live
//!
//! Task in background che a intervalli fissi ricalcola quali stanze sono live,
//! così la dashboard non serve uno snapshot vecchio. Il task si ferma quando
//! viene cancellato esplicitamente oppure quando l'handle viene droppato.

use crate::core::AppState;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{info, instrument};

pub struct LiveRoomsTicker {
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl LiveRoomsTicker {
    /// Avvia il task di refresh ogni `period`
    pub fn spawn(state: Arc<AppState>, period: Duration) -> Self {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let handle = tokio::spawn(run(state, period, shutdown_rx));
        Self {
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    /// Ferma il task e attende che sia terminato
    pub async fn cancel(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(|h| h.is_finished())
    }
}

impl Drop for LiveRoomsTicker {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[instrument(skip(state, shutdown))]
async fn run(state: Arc<AppState>, period: Duration, mut shutdown: oneshot::Receiver<()>) {
    info!("Live rooms ticker started");

    let mut interval = time::interval(period);
    // Salta il primo tick che avviene immediatamente: lo snapshot iniziale lo calcola AppState::new
    interval.tick().await;

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = interval.tick() => {
                state.refresh_live_rooms().await;
            }
        }
    }

    info!("Live rooms ticker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedClock;
    use crate::core::clock::Clock;
    use crate::entities::{Room, RoomTag};
    use crate::repositories::{FriendRepository, RoomRepository};
    use chrono::{DateTime, TimeZone, Utc};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    fn state(clock: Arc<FixedClock>) -> Arc<AppState> {
        let room = Room {
            id: "room-1".to_string(),
            title: "Meditation Circle".to_string(),
            description: String::new(),
            is_private: false,
            start_time: t0() - chrono::Duration::minutes(30),
            end_time: t0() + chrono::Duration::minutes(30),
            max_participants: None,
            tag: RoomTag::Wellness,
            participants: vec![],
            created_by: "currentUser".to_string(),
        };
        Arc::new(AppState::new(
            RoomRepository::new(vec![room]),
            FriendRepository::seeded(),
            clock,
            "currentUser",
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_refreshes_snapshot() {
        let clock = Arc::new(FixedClock::new(t0()));
        let state = state(clock.clone());
        assert_eq!(state.live_snapshot().await.rooms.len(), 1);

        let ticker = LiveRoomsTicker::spawn(state.clone(), Duration::from_secs(60));
        assert!(!ticker.is_finished());

        // la stanza chiude, ma lo snapshot cambia solo al prossimo tick
        clock.advance(chrono::Duration::hours(1));
        assert_eq!(state.live_snapshot().await.rooms.len(), 1);

        time::sleep(Duration::from_secs(61)).await;
        let snapshot = state.live_snapshot().await;
        assert!(snapshot.rooms.is_empty());
        assert_eq!(snapshot.refreshed_at, clock.now());

        ticker.cancel().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_task() {
        let clock = Arc::new(FixedClock::new(t0()));
        let state = state(clock.clone());
        let ticker = LiveRoomsTicker::spawn(state.clone(), Duration::from_secs(60));
        ticker.cancel().await;

        // dopo la cancellazione nessun refresh deve più avvenire
        clock.advance(chrono::Duration::hours(1));
        time::sleep(Duration::from_secs(180)).await;
        assert_eq!(state.live_snapshot().await.rooms.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_task() {
        let clock = Arc::new(FixedClock::new(t0()));
        let state = state(clock.clone());
        drop(LiveRoomsTicker::spawn(state.clone(), Duration::from_secs(60)));

        clock.advance(chrono::Duration::hours(1));
        time::sleep(Duration::from_secs(180)).await;
        assert_eq!(state.live_snapshot().await.rooms.len(), 1);
    }
}
