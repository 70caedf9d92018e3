//! RoomRepository - Store in memoria delle stanze generate all'avvio

use super::mock::generate_mock_rooms;
use super::{Read, ReadAll};
use crate::entities::{Room, RoomStatus};
use chrono::{DateTime, Duration, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

// ROOM REPO
pub struct RoomRepository {
    rooms: Vec<Room>,
}

impl RoomRepository {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    /// Builds the store from `count` mock rooms anchored to `now`.
    ///
    /// The same `seed` always produces the same collection.
    pub fn seeded(count: usize, seed: u64, current_user: &str, now: &DateTime<Utc>) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let rooms = generate_mock_rooms(count, current_user, now, &mut rng);
        info!(count = rooms.len(), seed, "Generated mock rooms");
        Self::new(rooms)
    }

    /// Get every room created by `owner`, in generation order
    pub fn find_many_by_owner(&self, owner: &str) -> Vec<Room> {
        self.rooms
            .iter()
            .filter(|r| r.is_owned_by(owner))
            .cloned()
            .collect()
    }

    pub fn find_many_public(&self) -> Vec<Room> {
        self.rooms.iter().filter(|r| !r.is_private).cloned().collect()
    }

    /// Rooms where `user` appears among the participants
    pub fn find_many_by_participant(&self, user: &str) -> Vec<Room> {
        self.rooms
            .iter()
            .filter(|r| r.participants.iter().any(|p| p == user))
            .cloned()
            .collect()
    }

    /// First `limit` rooms that are live at `now`
    pub fn find_live(&self, now: &DateTime<Utc>, limit: usize) -> Vec<Room> {
        self.rooms
            .iter()
            .filter(|r| r.status_at(now) == RoomStatus::Live)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Rooms starting within `window` after `now`, soonest first
    pub fn find_upcoming(&self, now: &DateTime<Utc>, window: Duration, limit: usize) -> Vec<Room> {
        let horizon = *now + window;
        let mut upcoming: Vec<Room> = self
            .rooms
            .iter()
            .filter(|r| *now < r.start_time && r.start_time < horizon)
            .cloned()
            .collect();
        upcoming.sort_by_key(|r| r.start_time);
        upcoming.truncate(limit);
        upcoming
    }

    /// Public rooms with the most participants first
    ///
    /// The sort is stable, so ties keep generation order.
    pub fn find_trending(&self, limit: usize) -> Vec<Room> {
        let mut trending = self.find_many_public();
        trending.sort_by(|a, b| b.participants.len().cmp(&a.participants.len()));
        trending.truncate(limit);
        trending
    }
}

impl Read<Room, str> for RoomRepository {
    fn read(&self, id: &str) -> Option<Room> {
        self.rooms.iter().find(|r| r.id == id).cloned()
    }
}

impl ReadAll<Room> for RoomRepository {
    fn read_all(&self) -> Vec<Room> {
        self.rooms.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::RoomTag;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    fn room(id: &str, start_in_hours: i64, participants: usize, is_private: bool) -> Room {
        let start = now() + Duration::hours(start_in_hours);
        Room {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            is_private,
            start_time: start,
            end_time: start + Duration::hours(1),
            max_participants: None,
            tag: RoomTag::Hangout,
            participants: (0..participants).map(|j| format!("u{j}")).collect(),
            created_by: "owner".to_string(),
        }
    }

    #[test]
    fn test_read_by_id() {
        let repo = RoomRepository::seeded(10, 1, "currentUser", &now());
        assert_eq!(repo.read_all().len(), 10);
        assert_eq!(repo.read("room-4").map(|r| r.id), Some("room-4".to_string()));
        assert!(repo.read("room-404").is_none());
    }

    #[test]
    fn test_owner_rooms_are_even_indices() {
        let repo = RoomRepository::seeded(10, 1, "currentUser", &now());
        let ids: Vec<String> = repo
            .find_many_by_owner("currentUser")
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["room-1", "room-3", "room-5", "room-7", "room-9"]);
    }

    #[test]
    fn test_upcoming_sorted_and_bounded() {
        let repo = RoomRepository::new(vec![
            room("late", 30, 1, false),
            room("soon", 2, 1, true),
            room("sooner", 1, 1, false),
            room("past", -3, 1, false),
            room("mid", 5, 1, false),
            room("later", 20, 1, false),
        ]);
        let ids: Vec<String> = repo
            .find_upcoming(&now(), Duration::hours(24), 3)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["sooner", "soon", "mid"]);
    }

    #[test]
    fn test_trending_only_public_by_participants() {
        let repo = RoomRepository::new(vec![
            room("a", 1, 2, false),
            room("b", 1, 5, true),
            room("c", 1, 4, false),
            room("d", 1, 4, false),
            room("e", 1, 1, false),
        ]);
        let ids: Vec<String> = repo.find_trending(3).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["c", "d", "a"]);
    }

    #[test]
    fn test_live_limited() {
        let repo = RoomRepository::seeded(30, 5, "currentUser", &now());
        let live = repo.find_live(&now(), 3);
        assert_eq!(live.len(), 3);
        assert_eq!(live[0].id, "room-1");
        assert_eq!(live[1].id, "room-4");
    }
}
