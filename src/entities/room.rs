//! Room entity - Entità stanza e derivazione dello stato

use super::enums::{RoomStatus, RoomTag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Room {
    pub id: String,
    pub title: String,
    pub description: String,
    pub is_private: bool,
    // start_time < end_time viene verificato solo dal form di creazione
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    // None = nessun limite
    pub max_participants: Option<u32>,
    pub tag: RoomTag,
    // identificativi liberi, l'ordine conta e i duplicati non vengono rimossi
    pub participants: Vec<String>,
    pub created_by: String,
}

/// Derive the lifecycle stage of a time window at instant `now`.
///
/// `now < start` is scheduled, `now > end` is closed, every other instant
/// (bounds included) is live.
pub fn derive_status(
    start: &DateTime<Utc>,
    end: &DateTime<Utc>,
    now: &DateTime<Utc>,
) -> RoomStatus {
    if now < start {
        RoomStatus::Scheduled
    } else if now > end {
        RoomStatus::Closed
    } else {
        RoomStatus::Live
    }
}

impl Room {
    /// Stato della stanza all'istante `now`, da ricalcolare ad ogni lettura
    pub fn status_at(&self, now: &DateTime<Utc>) -> RoomStatus {
        derive_status(&self.start_time, &self.end_time, now)
    }

    pub fn is_owned_by(&self, user: &str) -> bool {
        self.created_by == user
    }

    /// Etichetta della capienza, es. "3/10" oppure "3" se illimitata
    pub fn capacity_label(&self) -> String {
        match self.max_participants {
            Some(max) => format!("{}/{}", self.participants.len(), max),
            None => self.participants.len().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    fn room(start: DateTime<Utc>, end: DateTime<Utc>) -> Room {
        Room {
            id: "room-1".to_string(),
            title: "Weekly Catchup".to_string(),
            description: "Our regular catchup".to_string(),
            is_private: false,
            start_time: start,
            end_time: end,
            max_participants: Some(10),
            tag: RoomTag::Work,
            participants: vec!["User00".to_string(), "User01".to_string()],
            created_by: "currentUser".to_string(),
        }
    }

    #[test]
    fn test_status_scenarios() {
        let now = now();
        let scheduled = room(now + Duration::hours(1), now + Duration::hours(2));
        let live = room(now - Duration::hours(1), now + Duration::hours(1));
        let closed = room(now - Duration::hours(5), now - Duration::hours(2));

        assert_eq!(scheduled.status_at(&now), RoomStatus::Scheduled);
        assert_eq!(live.status_at(&now), RoomStatus::Live);
        assert_eq!(closed.status_at(&now), RoomStatus::Closed);
    }

    #[test]
    fn test_status_bounds_are_live() {
        let now = now();
        let end = now + Duration::hours(1);
        assert_eq!(derive_status(&now, &end, &now), RoomStatus::Live);
        assert_eq!(derive_status(&now, &end, &end), RoomStatus::Live);
        assert_eq!(
            derive_status(&now, &end, &(end + Duration::milliseconds(1))),
            RoomStatus::Closed
        );
        assert_eq!(
            derive_status(&now, &end, &(now - Duration::milliseconds(1))),
            RoomStatus::Scheduled
        );
    }

    #[test]
    fn test_status_is_monotonic_in_time() {
        let start = now();
        let end = start + Duration::minutes(90);
        let rank = |s: RoomStatus| match s {
            RoomStatus::Scheduled => 0,
            RoomStatus::Live => 1,
            RoomStatus::Closed => 2,
        };

        let mut previous = 0;
        for minutes in -300..=300 {
            let t = start + Duration::minutes(minutes);
            let current = rank(derive_status(&start, &end, &t));
            assert!(current >= previous, "status went backward at {t}");
            previous = current;
        }
        assert_eq!(previous, 2);
    }

    #[test]
    fn test_capacity_label() {
        let now = now();
        let mut r = room(now, now + Duration::hours(1));
        assert_eq!(r.capacity_label(), "2/10");
        r.max_participants = None;
        assert_eq!(r.capacity_label(), "2");
    }
}
