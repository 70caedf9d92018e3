//! MessageRepository - Sessioni di chat effimere, una per stanza
//!
//! Una sessione nasce quando qualcuno apre una stanza e sparisce quando ne esce.
//! I messaggi sono solo in memoria e l'ordine è quello di inserimento.

use super::{Create, Delete};
use crate::dtos::CreateMessageDTO;
use crate::entities::{Message, Room, RoomStatus};
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{debug, instrument};

// MESSAGE REPO
pub struct MessageRepository {
    /// room_id -> messaggi in ordine di arrivo
    sessions: DashMap<String, Vec<Message>>,
}

impl MessageRepository {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Opens the chat session of `room`, seeding the welcome transcript
    /// when the room is live at `now`.
    ///
    /// An already open session is returned untouched, so messages sent
    /// earlier in the session survive a reload of the page. A room that is
    /// not live gets an empty transcript and no session is stored, so the
    /// welcome messages still show up once it goes live.
    #[instrument(skip(self, room), fields(room_id = %room.id))]
    pub fn open_session(&self, room: &Room, now: &DateTime<Utc>) -> Vec<Message> {
        match self.sessions.entry(room.id.clone()) {
            Entry::Occupied(session) => session.get().clone(),
            Entry::Vacant(slot) if room.status_at(now) == RoomStatus::Live => {
                debug!("Seeding transcript for live room");
                slot.insert(seed_transcript(room)).clone()
            }
            Entry::Vacant(_) => Vec::new(),
        }
    }

    /// Get all messages of a room session, ordered by arrival
    pub fn find_many_by_room_id(&self, room_id: &str) -> Vec<Message> {
        self.sessions
            .get(room_id)
            .map(|s| s.value().clone())
            .unwrap_or_default()
    }
}

impl Default for MessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Create<Message, CreateMessageDTO> for MessageRepository {
    fn create(&self, data: &CreateMessageDTO) -> Message {
        let message = Message {
            id: format!("msg-{}", data.timestamp.timestamp_millis()),
            text: data.text.clone(),
            username: data.username.clone(),
            timestamp: data.timestamp,
        };

        // l'entry tiene il lock sulla sessione: gli append restano ordinati
        self.sessions
            .entry(data.room_id.clone())
            .or_default()
            .push(message.clone());

        message
    }
}

impl Delete<str> for MessageRepository {
    fn delete(&self, room_id: &str) -> bool {
        self.sessions.remove(room_id).is_some()
    }
}

/// Trascrizione fissa di quattro messaggi ancorata all'inizio della stanza
fn seed_transcript(room: &Room) -> Vec<Message> {
    let lines = [
        ("1", room.created_by.as_str(), "Hey everyone! Welcome to the room."),
        ("2", "participant1", "Thanks for setting this up!"),
        ("3", "participant2", "What's the main topic for today?"),
        ("4", room.created_by.as_str(), "We're discussing the new project roadmap"),
    ];

    lines
        .into_iter()
        .zip(1..)
        .map(|((id, username, text), minute)| Message {
            id: id.to_string(),
            text: text.to_string(),
            username: username.to_string(),
            timestamp: room.start_time + Duration::minutes(minute),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::RoomTag;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    fn room(start_offset_hours: i64) -> Room {
        let start = now() + Duration::hours(start_offset_hours);
        Room {
            id: "room-1".to_string(),
            title: "Coding Sprint".to_string(),
            description: String::new(),
            is_private: false,
            start_time: start,
            end_time: start + Duration::hours(2),
            max_participants: None,
            tag: RoomTag::Work,
            participants: vec!["User00".to_string()],
            created_by: "host".to_string(),
        }
    }

    fn draft(text: &str) -> CreateMessageDTO {
        CreateMessageDTO {
            room_id: "room-1".to_string(),
            text: text.to_string(),
            username: "currentUser".to_string(),
            timestamp: now(),
        }
    }

    #[test]
    fn test_live_room_gets_seeded_transcript() {
        let repo = MessageRepository::new();
        let live = room(-1);
        let messages = repo.open_session(&live, &now());

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].username, "host");
        assert_eq!(messages[1].username, "participant1");
        assert_eq!(messages[3].username, "host");
        assert_eq!(messages[0].timestamp, live.start_time + Duration::minutes(1));
        assert_eq!(messages[3].timestamp, live.start_time + Duration::minutes(4));
    }

    #[test]
    fn test_scheduled_room_starts_empty() {
        let repo = MessageRepository::new();
        assert!(repo.open_session(&room(3), &now()).is_empty());
        assert!(!repo.delete("room-1"));
    }

    #[test]
    fn test_scheduled_room_gets_transcript_once_live() {
        let repo = MessageRepository::new();
        let scheduled = room(3);
        assert!(repo.open_session(&scheduled, &now()).is_empty());

        // la stessa stanza riaperta dopo l'inizio
        let later = scheduled.start_time + Duration::minutes(5);
        let messages = repo.open_session(&scheduled, &later);
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].text, "Hey everyone! Welcome to the room.");
    }

    #[test]
    fn test_append_is_last_and_grows_by_one() {
        let repo = MessageRepository::new();
        let before = repo.open_session(&room(-1), &now()).len();

        let sent = repo.create(&draft("ciao a tutti"));
        let after = repo.find_many_by_room_id("room-1");

        assert_eq!(after.len(), before + 1);
        assert_eq!(after.last(), Some(&sent));
        assert_eq!(sent.username, "currentUser");
    }

    #[test]
    fn test_reopen_keeps_session_and_delete_discards() {
        let repo = MessageRepository::new();
        let live = room(-1);
        repo.open_session(&live, &now());
        repo.create(&draft("still here"));

        assert_eq!(repo.open_session(&live, &now()).len(), 5);
        assert!(repo.delete("room-1"));
        assert!(repo.find_many_by_room_id("room-1").is_empty());
        assert!(!repo.delete("room-1"));
        assert_eq!(repo.open_session(&live, &now()).len(), 4);
    }
}
