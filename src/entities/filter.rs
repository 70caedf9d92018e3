//! Room filters - Filtri per stato e tag su una collezione di stanze

use super::enums::{RoomStatus, RoomTag};
use super::room::Room;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Selettore di stato: `All` è un jolly, non un valore letterale
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Scheduled,
    Live,
    Closed,
}

impl StatusFilter {
    pub fn matches(&self, status: RoomStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Scheduled => status == RoomStatus::Scheduled,
            StatusFilter::Live => status == RoomStatus::Live,
            StatusFilter::Closed => status == RoomStatus::Closed,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TagFilter {
    #[default]
    All,
    Hangout,
    Work,
    Brainstorm,
    Wellness,
}

impl TagFilter {
    pub fn matches(&self, tag: RoomTag) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Hangout => tag == RoomTag::Hangout,
            TagFilter::Work => tag == RoomTag::Work,
            TagFilter::Brainstorm => tag == RoomTag::Brainstorm,
            TagFilter::Wellness => tag == RoomTag::Wellness,
        }
    }
}

/// Keep the rooms matching both selectors, preserving their relative order.
pub fn filter_rooms(
    rooms: &[Room],
    status: StatusFilter,
    tag: TagFilter,
    now: &DateTime<Utc>,
) -> Vec<Room> {
    rooms
        .iter()
        .filter(|room| status.matches(room.status_at(now)) && tag.matches(room.tag))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::mock::generate_mock_rooms;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixture() -> (Vec<Room>, DateTime<Utc>) {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        (generate_mock_rooms(30, "currentUser", &now, &mut rng), now)
    }

    #[test]
    fn test_all_all_is_identity() {
        let (rooms, now) = fixture();
        let filtered = filter_rooms(&rooms, StatusFilter::All, TagFilter::All, &now);
        assert_eq!(filtered, rooms);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let (rooms, now) = fixture();
        for status in [
            StatusFilter::All,
            StatusFilter::Scheduled,
            StatusFilter::Live,
            StatusFilter::Closed,
        ] {
            for tag in [TagFilter::All, TagFilter::Work, TagFilter::Wellness] {
                let once = filter_rooms(&rooms, status, tag, &now);
                let twice = filter_rooms(&once, status, tag, &now);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn test_filter_preserves_order_and_predicates() {
        let (rooms, now) = fixture();
        let live = filter_rooms(&rooms, StatusFilter::Live, TagFilter::All, &now);

        assert_eq!(live.len(), 10);
        assert!(live.iter().all(|r| r.status_at(&now) == RoomStatus::Live));

        let positions: Vec<usize> = live
            .iter()
            .map(|r| rooms.iter().position(|o| o.id == r.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_tag_filter_only_keeps_tag() {
        let (rooms, now) = fixture();
        let hangouts = filter_rooms(&rooms, StatusFilter::All, TagFilter::Hangout, &now);
        let expected = rooms.iter().filter(|r| r.tag == RoomTag::Hangout).count();
        assert_eq!(hangouts.len(), expected);
    }

    #[test]
    fn test_selectors_deserialize() {
        let s: StatusFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(s, StatusFilter::All);
        let t: TagFilter = serde_json::from_str("\"brainstorm\"").unwrap();
        assert_eq!(t, TagFilter::Brainstorm);
        assert!(serde_json::from_str::<TagFilter>("\"party\"").is_err());
    }
}
